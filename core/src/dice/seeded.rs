use rand::prelude::*;

use super::*;

/// Uniform six-sided die driven by a seeded small RNG, same seed same sequence.
#[derive(Clone, Debug)]
pub struct SeededDice {
    seed: u64,
    rng: SmallRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for SeededDice {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}
