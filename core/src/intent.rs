use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coord, Coord2};

/// A player request addressed to the turn engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Roll,
    Putt,
    CancelPutt,
    Mulligan,
    Move(Coord2),
    Reset,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIntentError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    UnknownCommand(alloc::string::String),
    #[error("move needs two coordinates, e.g. `move 3 4`")]
    BadCoordinates,
    #[error("unexpected argument {0:?}")]
    TrailingArgument(alloc::string::String),
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Parses text commands such as `roll`, `putt`, `cancel`, `mulligan`, `move 3 4` and `reset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or(ParseIntentError::Empty)?;

        let intent = match command.to_ascii_lowercase().as_str() {
            "roll" | "r" => Intent::Roll,
            "putt" | "p" => Intent::Putt,
            "cancel" | "c" => Intent::CancelPutt,
            "mulligan" | "m" => Intent::Mulligan,
            "reset" => Intent::Reset,
            "move" | "go" => {
                let mut coord = || {
                    words
                        .next()
                        .and_then(|word| word.parse::<Coord>().ok())
                        .ok_or(ParseIntentError::BadCoordinates)
                };
                let x = coord()?;
                let y = coord()?;
                Intent::Move((x, y))
            }
            _ => return Err(ParseIntentError::UnknownCommand(command.into())),
        };

        match words.next() {
            Some(extra) => Err(ParseIntentError::TrailingArgument(extra.into())),
            None => Ok(intent),
        }
    }
}
