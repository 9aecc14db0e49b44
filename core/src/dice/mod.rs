pub use scripted::*;
pub use seeded::*;

mod scripted;
mod seeded;

pub const DIE_FACES: u8 = 6;

/// Source of shot rolls, each in `1..=DIE_FACES`.
pub trait Dice {
    fn roll(&mut self) -> u8;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: Dice + ?Sized> Dice for alloc::boxed::Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}
