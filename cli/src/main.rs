use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use paper_golf_core as game;

mod config;
mod view;

/// Play a hole of paper golf from the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Course file (TOML), defaults to the built-in hole
    #[arg(short, long)]
    course: Option<PathBuf>,

    /// Print JSON snapshots instead of the board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let course = match &args.course {
        Some(path) => config::load_course(path)?,
        None => game::Course::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let mut engine = game::TurnEngine::new(course, game::SeededDice::new(seed));
    let mut out = io::stdout().lock();
    show(&mut out, &engine, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit" | "q") {
            break;
        }

        let intent = match line.parse::<game::Intent>() {
            Ok(intent) => intent,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        if !engine.dispatch(intent)? {
            log::info!("{intent:?} not allowed right now");
        }
        show(&mut out, &engine, args.json)?;
    }

    Ok(())
}

fn show<D: game::Dice>(
    out: &mut impl Write,
    engine: &game::TurnEngine<D>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &view::Snapshot::new(engine))?;
        writeln!(out)?;
    } else {
        write!(out, "{}", view::render_board(engine))?;
        write!(out, "{}", view::render_status(engine))?;
    }
    out.flush()?;
    Ok(())
}
