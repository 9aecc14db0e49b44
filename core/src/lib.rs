#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub use cell::*;
pub use course::*;
pub use destinations::*;
pub use dice::*;
pub use engine::*;
pub use error::*;
pub use intent::*;
pub use mulligan::*;
pub use putting::*;
pub use shot::*;
pub use terrain::*;
pub use types::*;

mod cell;
mod course;
mod destinations;
mod dice;
mod engine;
mod error;
mod intent;
mod mulligan;
mod putting;
mod shot;
mod terrain;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    NoChange,
    Rolled(u8),
}

impl RollOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Rolled(_) => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PuttOutcome {
    NoChange,
    Started,
    Cancelled,
}

impl PuttOutcome {
    pub const fn has_update(self) -> bool {
        use PuttOutcome::*;
        match self {
            NoChange => false,
            Started => true,
            Cancelled => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MulliganOutcome {
    NoChange,
    FreeTee,
    Paid,
}

impl MulliganOutcome {
    pub const fn has_update(self) -> bool {
        use MulliganOutcome::*;
        match self {
            NoChange => false,
            FreeTee => true,
            Paid => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Holed,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Holed => true,
        }
    }
}
