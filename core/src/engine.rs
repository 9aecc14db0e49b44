use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One completed stroke.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    pub from: Coord2,
    pub to: Coord2,
}

/// Action waiting for the player to pick a destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    Roll(u8),
    Putt,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Idle,
    Rolled,
    Putting,
    GameOver,
}

impl TurnPhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Everything that changes while a hole is played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    ball: Coord2,
    strokes: u32,
    path: Vec<PathSegment>,
    pending: Option<PendingAction>,
    legal: Destinations,
    mulligans: MulliganLedger,
    last_roll: Option<u8>,
    game_over: bool,
}

impl GameState {
    pub fn new(tee: Coord2) -> Self {
        Self {
            ball: tee,
            strokes: 0,
            path: Vec::new(),
            pending: None,
            legal: Destinations::new(),
            mulligans: MulliganLedger::new(),
            last_roll: None,
            game_over: false,
        }
    }

    pub fn ball(&self) -> Coord2 {
        self.ball
    }

    pub fn strokes(&self) -> u32 {
        self.strokes
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn pending_roll(&self) -> Option<u8> {
        match self.pending {
            Some(PendingAction::Roll(roll)) => Some(roll),
            _ => None,
        }
    }

    pub fn is_putting(&self) -> bool {
        matches!(self.pending, Some(PendingAction::Putt))
    }

    pub fn legal_destinations(&self) -> &Destinations {
        &self.legal
    }

    pub fn mulligans_used(&self) -> u8 {
        self.mulligans.used()
    }

    pub fn has_used_free_tee(&self) -> bool {
        self.mulligans.has_used_free_tee()
    }

    /// Most recent roll, kept after the move that used it.
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> TurnPhase {
        match (self.game_over, self.pending) {
            (true, _) => TurnPhase::GameOver,
            (false, None) => TurnPhase::Idle,
            (false, Some(PendingAction::Roll(_))) => TurnPhase::Rolled,
            (false, Some(PendingAction::Putt)) => TurnPhase::Putting,
        }
    }

    fn clear_pending(&mut self) {
        self.pending = None;
        self.legal.clear();
    }
}

/// Owns the game state of one hole and applies player intents to it.
///
/// Every intent is atomic: it is either applied in full or rejected with a
/// `NoChange` outcome, leaving the state untouched.
#[derive(Clone, Debug)]
pub struct TurnEngine<D> {
    course: Course,
    state: GameState,
    dice: D,
}

impl<D: Dice> TurnEngine<D> {
    pub fn new(course: Course, dice: D) -> Self {
        let state = GameState::new(course.tee());
        Self {
            course,
            state,
            dice,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn terrain(&self) -> &TerrainGrid {
        self.course.terrain()
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.phase().is_finished()
    }

    pub fn roll(&mut self) -> Result<RollOutcome> {
        if self.phase() != TurnPhase::Idle {
            log::debug!("Roll rejected in phase {:?}", self.phase());
            return Ok(RollOutcome::NoChange);
        }

        let roll = self.dice.roll();
        let legal = roll_destinations(self.course.terrain(), self.state.ball, roll)?;
        log::debug!("Rolled {roll} from {:?}, {} destinations", self.state.ball, legal.len());

        self.state.pending = Some(PendingAction::Roll(roll));
        self.state.legal = legal;
        self.state.last_roll = Some(roll);
        Ok(RollOutcome::Rolled(roll))
    }

    pub fn start_putting(&mut self) -> Result<PuttOutcome> {
        if self.phase() != TurnPhase::Idle {
            log::debug!("Putt rejected in phase {:?}", self.phase());
            return Ok(PuttOutcome::NoChange);
        }

        let legal = putt_destinations(self.course.terrain(), self.state.ball)?;
        self.state.pending = Some(PendingAction::Putt);
        self.state.legal = legal;
        Ok(PuttOutcome::Started)
    }

    pub fn cancel_putting(&mut self) -> PuttOutcome {
        if self.phase() != TurnPhase::Putting {
            return PuttOutcome::NoChange;
        }

        self.state.clear_pending();
        PuttOutcome::Cancelled
    }

    pub fn can_use_mulligan(&self) -> bool {
        self.phase() == TurnPhase::Rolled && self.next_mulligan_kind().is_some()
    }

    /// Allowance the next mulligan would draw on, for labelling.
    pub fn next_mulligan_kind(&self) -> Option<MulliganKind> {
        self.state.mulligans.next_kind(self.state.strokes)
    }

    pub fn mulligans_remaining(&self) -> u8 {
        self.state.mulligans.remaining()
    }

    pub fn use_mulligan(&mut self) -> MulliganOutcome {
        if self.phase() != TurnPhase::Rolled {
            log::debug!("Mulligan rejected in phase {:?}", self.phase());
            return MulliganOutcome::NoChange;
        }

        let Some(kind) = self.state.mulligans.consume(self.state.strokes) else {
            log::debug!("Mulligan rejected, none left");
            return MulliganOutcome::NoChange;
        };

        self.state.clear_pending();
        match kind {
            MulliganKind::FreeTee => MulliganOutcome::FreeTee,
            MulliganKind::Paid => MulliganOutcome::Paid,
        }
    }

    pub fn attempt_move(&mut self, target: Coord2) -> MoveOutcome {
        if self.state.game_over || !self.state.legal.contains(target) {
            log::debug!("Move to {target:?} rejected");
            return MoveOutcome::NoChange;
        }

        // legal destinations are always on the course
        let holed = self.course.terrain()[target].is_hole();

        let state = &mut self.state;
        state.path.push(PathSegment {
            from: state.ball,
            to: target,
        });
        state.ball = target;
        state.strokes += 1;
        state.clear_pending();

        if holed {
            state.game_over = true;
            log::info!("Holed out in {} strokes (par {})", state.strokes, self.course.par());
            MoveOutcome::Holed
        } else {
            MoveOutcome::Moved
        }
    }

    pub fn reset(&mut self) {
        self.state = GameState::new(self.course.tee());
    }

    /// Applies a single intent, returns whether anything changed.
    pub fn dispatch(&mut self, intent: Intent) -> Result<bool> {
        Ok(match intent {
            Intent::Roll => self.roll()?.has_update(),
            Intent::Putt => self.start_putting()?.has_update(),
            Intent::CancelPutt => self.cancel_putting().has_update(),
            Intent::Mulligan => self.use_mulligan().has_update(),
            Intent::Move(target) => self.attempt_move(target).has_update(),
            Intent::Reset => {
                self.reset();
                true
            }
        })
    }

    /// Strokes relative to par, negative when under.
    pub fn score_to_par(&self) -> i64 {
        i64::from(self.state.strokes) - i64::from(self.course.par())
    }

    pub fn is_over_par(&self) -> bool {
        self.state.strokes > self.course.par()
    }
}
