use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Terrain kind of a single course cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Rough,
    Fairway,
    Sand,
    Water,
    Tree,
    Hole,
    Start,
}

impl CellKind {
    /// Movement range for a roll taken from a ball resting on this kind.
    pub const fn adjust_roll(self, roll: u8) -> u8 {
        use CellKind::*;

        let adjusted = match self {
            Fairway => roll.saturating_add(1),
            Sand => roll.saturating_sub(1),
            Rough | Water | Tree | Hole | Start => roll,
        };
        if adjusted < 1 { 1 } else { adjusted }
    }

    /// Whether a rolled shot may come to rest here.
    pub const fn accepts_shot(self) -> bool {
        use CellKind::*;

        match self {
            Water | Tree => false,
            Rough | Fairway | Sand | Hole | Start => true,
        }
    }

    /// Whether a putt may come to rest here. Trees only block full shots.
    pub const fn accepts_putt(self) -> bool {
        use CellKind::*;

        match self {
            Water => false,
            Rough | Fairway | Sand | Tree | Hole | Start => true,
        }
    }

    pub const fn is_hole(self) -> bool {
        matches!(self, Self::Hole)
    }

    pub const fn glyph(self) -> char {
        use CellKind::*;

        match self {
            Rough => '.',
            Fairway => '=',
            Sand => ':',
            Water => '~',
            Tree => 'T',
            Hole => 'O',
            Start => 'S',
        }
    }

    pub const fn from_glyph(glyph: char) -> Result<Self> {
        use CellKind::*;

        Ok(match glyph {
            '.' => Rough,
            '=' => Fairway,
            ':' => Sand,
            '~' => Water,
            'T' => Tree,
            'O' => Hole,
            'S' => Start,
            other => return Err(GameError::UnknownCell(other)),
        })
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Rough
    }
}

impl TryFrom<char> for CellKind {
    type Error = GameError;

    fn try_from(glyph: char) -> Result<Self> {
        Self::from_glyph(glyph)
    }
}
