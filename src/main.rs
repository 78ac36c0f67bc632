#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    cell_name, draw_board, init_logging, parse_cell, run_session, status_line, CliSurface,
    GameSnapshot, GameState, RejectedClick, ScriptedSurface, SessionSummary,
};

#[cfg(feature = "std")]
use anyhow::anyhow;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

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
    /// Two players take turns at this terminal.
    Play,
    /// Replay a list of clicks and print where the game ends up.
    Replay {
        /// Cells in click order, as `B2` (column, row) or keypad digits 1-9.
        #[arg(required = true)]
        moves: Vec<String>,
        #[arg(long, help = "Print a JSON report instead of the board")]
        json: bool,
    },
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct ReplayReport<'a> {
    summary: SessionSummary,
    board: GameSnapshot,
    rejected: &'a [RejectedClick],
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            println!("Tic-tac-toe. Enter cells like B2 or 1-9, q to quit.");
            let mut game = GameState::new();
            let mut surface = CliSurface::stdio();
            let summary = run_session(&mut game, &mut surface);
            println!(
                "\nPlayed {} round(s), {} draw(s). Final score: {}",
                summary.rounds, summary.draws, summary.score
            );
        }
        Commands::Replay { moves, json } => {
            let clicks = moves
                .iter()
                .map(|m| {
                    parse_cell(m)
                        .ok_or_else(|| anyhow!("invalid move {:?}: expected a cell like B2 or 1-9", m))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            let mut game = GameState::new();
            let mut surface = ScriptedSurface::new(clicks);
            let summary = run_session(&mut game, &mut surface);
            let board = game.snapshot();

            if json {
                let report = ReplayReport {
                    summary,
                    board,
                    rejected: surface.rejected(),
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                print!("{}", draw_board(&board));
                print!("{}", status_line(&board));
                for click in surface.rejected() {
                    println!("ignored {}: {}", cell_name(click.row, click.col), click.reason);
                }
                println!(
                    "Rounds: {}, draws: {}, score: {}",
                    summary.rounds, summary.draws, summary.score
                );
            }
        }
    }
    Ok(())
}
