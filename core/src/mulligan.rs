use serde::{Deserialize, Serialize};

/// Paid mulligans available on each hole, on top of the free one off the tee.
pub const MULLIGANS_PER_HOLE: u8 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MulliganKind {
    FreeTee,
    Paid,
}

/// Re-roll allowance for one hole.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulliganLedger {
    used: u8,
    free_tee_used: bool,
}

impl MulliganLedger {
    pub const fn new() -> Self {
        Self {
            used: 0,
            free_tee_used: false,
        }
    }

    /// Paid mulligans consumed so far.
    pub const fn used(&self) -> u8 {
        self.used
    }

    pub const fn remaining(&self) -> u8 {
        MULLIGANS_PER_HOLE.saturating_sub(self.used)
    }

    pub const fn has_used_free_tee(&self) -> bool {
        self.free_tee_used
    }

    /// Which allowance the next mulligan would draw on, if any is left.
    pub const fn next_kind(&self, strokes: u32) -> Option<MulliganKind> {
        if strokes == 0 && !self.free_tee_used {
            Some(MulliganKind::FreeTee)
        } else if self.used < MULLIGANS_PER_HOLE {
            Some(MulliganKind::Paid)
        } else {
            None
        }
    }

    /// Draws on the next available allowance, returns `None` when nothing is left.
    pub fn consume(&mut self, strokes: u32) -> Option<MulliganKind> {
        let kind = self.next_kind(strokes)?;
        match kind {
            MulliganKind::FreeTee => self.free_tee_used = true,
            MulliganKind::Paid => self.used += 1,
        }
        Some(kind)
    }
}
