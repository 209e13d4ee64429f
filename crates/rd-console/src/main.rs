//! ReelDraw console front-end
//!
//! Wires the draw core to a terminal: stdin is the trigger surface,
//! stdout is the board, the terminal bell is the completion chime.

mod defaults;
mod present;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use rd_core::RdResult;
use rd_sched::Scheduler;
use rd_session::{LotteryOrchestrator, SessionConfig};

use crate::present::{BellChime, ConsolePresenter};

#[derive(Parser, Debug)]
#[command(name = "reeldraw", about = "Five-reel prize draw in your terminal")]
struct Cli {
    /// Draw duration in milliseconds
    #[arg(long, default_value_t = 5000)]
    deadline_ms: u64,

    /// Seed the shuffle rng for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many draws unattended, then exit
    #[arg(long)]
    spins: Option<u32>,
}

fn main() -> RdResult<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("starting reeldraw (deadline {} ms)", cli.deadline_ms);

    let config = SessionConfig {
        deadline_ms: cli.deadline_ms,
        ..SessionConfig::standard()
    };

    let orchestrator = LotteryOrchestrator::new(
        defaults::default_strips()?,
        config,
        Arc::new(ConsolePresenter),
        Arc::new(defaults::default_catalog()),
        Arc::new(BellChime),
    )?;
    if let Some(seed) = cli.seed {
        orchestrator.seed(seed);
    }

    orchestrator.show_idle_hint();

    if let Some(spins) = cli.spins {
        for _ in 0..spins {
            run_draw(&orchestrator);
        }
        return Ok(());
    }

    // Trigger surface: Enter or "spin" starts a draw, "quit" exits.
    let stdin = io::stdin();
    loop {
        print!("[Enter = spin, q = quit] > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "" | "s" | "spin" => run_draw(&orchestrator),
            "q" | "quit" | "exit" => break,
            other => println!("unknown command '{other}'"),
        }
    }

    Ok(())
}

/// One full draw on the wall clock. Returns once all reels have stopped
/// and the results have been presented.
fn run_draw(orchestrator: &LotteryOrchestrator) {
    let mut sched = Scheduler::new();
    orchestrator.start(&mut sched);
    sched.run_realtime();
}
