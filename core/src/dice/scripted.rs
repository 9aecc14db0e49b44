use alloc::collections::VecDeque;

use super::*;

/// Replays a fixed sequence of rolls, then keeps rolling ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        match self.rolls.pop_front() {
            Some(roll) => roll.clamp(1, DIE_FACES),
            None => {
                log::warn!("Scripted dice exhausted, rolling 1");
                1
            }
        }
    }
}
