#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_duel::{init_logging, run_duel, seeded_rng, ui, MatchRunner, RunConfig};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a match from one controller loop, with optional save/resume.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Pause after every turn, in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Snapshot file to resume from and autosave to")]
        save: Option<PathBuf>,
        #[arg(long, default_value_t = 5, help = "Autosave after every N turns (0 disables)")]
        autosave_every: u32,
    },
    /// Play a match between two tasks that pass the turn over a message channel.
    Duel {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Pause after every turn, in milliseconds")]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local {
            seed,
            delay_ms,
            save,
            autosave_every,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = RunConfig {
                turn_delay: Duration::from_millis(delay_ms),
                autosave_every,
                save_path: save,
                ..RunConfig::default()
            };
            let (runner, restored) =
                MatchRunner::start(seeded_rng(seed), config).map_err(|e| anyhow::anyhow!(e))?;
            let mut runner = runner.with_board_output(true);
            if restored {
                println!("Resuming saved match at turn {}", runner.state().turns());
            } else {
                println!("Starting a new match");
            }
            ui::print_match(runner.state());
            runner.run().await?;
            ui::print_result(runner.state().status());
        }
        Commands::Duel { seed, delay_ms } => {
            println!("Starting a two-task duel...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let summary = run_duel(seed, Duration::from_millis(delay_ms)).await?;
            println!(
                "\n{} wins! Parent fired {} shots ({} ships left), child fired {} shots ({} ships left)",
                summary.winner,
                summary.parent_shots,
                summary.parent_remaining,
                summary.child_shots,
                summary.child_remaining
            );
        }
    }
    Ok(())
}
