use std::fmt::Write;

use paper_golf_core as game;
use serde::Serialize;

const BALL: char = '@';
const TARGET: char = '*';

/// Everything a front end needs to draw one frame.
#[derive(Debug, Serialize)]
pub(crate) struct Snapshot<'a> {
    course: &'a game::CourseInfo,
    layout: Vec<String>,
    state: &'a game::GameState,
    phase: game::TurnPhase,
    can_use_mulligan: bool,
    next_mulligan: Option<game::MulliganKind>,
    mulligans_remaining: u8,
    score_to_par: i64,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new<D: game::Dice>(engine: &'a game::TurnEngine<D>) -> Self {
        Self {
            course: engine.course().info(),
            layout: engine.terrain().to_rows(),
            state: engine.state(),
            phase: engine.phase(),
            can_use_mulligan: engine.can_use_mulligan(),
            next_mulligan: engine.next_mulligan_kind(),
            mulligans_remaining: engine.mulligans_remaining(),
            score_to_par: engine.score_to_par(),
        }
    }
}

pub(crate) fn render_board<D: game::Dice>(engine: &game::TurnEngine<D>) -> String {
    let terrain = engine.terrain();
    let state = engine.state();
    let (width, height) = terrain.size();

    let mut out = String::from("   ");
    for x in 0..width {
        out.push(char::from(b'0' + x % 10));
    }
    out.push('\n');

    for y in 0..height {
        let _ = write!(out, "{y:>2} ");
        for x in 0..width {
            let coords = (x, y);
            let glyph = if coords == state.ball() {
                BALL
            } else if state.legal_destinations().contains(coords) {
                TARGET
            } else {
                terrain[coords].glyph()
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

pub(crate) fn render_status<D: game::Dice>(engine: &game::TurnEngine<D>) -> String {
    let info = engine.course().info();
    let state = engine.state();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} - Hole {} of {}",
        info.name, info.current_hole, info.total_holes
    );
    let over_par = if engine.is_over_par() { " (Over Par)" } else { "" };
    let _ = writeln!(out, "Strokes: {}{over_par}  Par: {}", state.strokes(), info.par);
    let _ = writeln!(out, "Mulligans: {} remaining", engine.mulligans_remaining());

    match engine.phase() {
        game::TurnPhase::GameOver => {
            let _ = writeln!(out, "Holed in {}!", state.strokes());
        }
        game::TurnPhase::Rolled => {
            let roll = state.pending_roll().unwrap_or_default();
            if state.legal_destinations().is_empty() {
                let _ = writeln!(out, "Roll: {roll} - no legal shot, take a mulligan");
            } else {
                let _ = writeln!(out, "Roll: {roll} - pick a {TARGET} square with `move X Y`");
            }
            if engine.can_use_mulligan() {
                let label = match engine.next_mulligan_kind() {
                    Some(game::MulliganKind::FreeTee) => "free mulligan",
                    _ => "mulligan",
                };
                let _ = writeln!(out, "`mulligan` to re-roll ({label})");
            }
        }
        game::TurnPhase::Putting => {
            let _ = writeln!(out, "Putting - pick an adjacent {TARGET} square, or `cancel`");
        }
        game::TurnPhase::Idle => {
            let _ = writeln!(out, "`roll` to shoot or `putt` to tap it one square");
        }
    }
    out
}
