mod config;
mod report;

use anyhow::{bail, Context};
use clap::Parser;
use config::{OutputFormat, ReplayConfig};
use dojo_core::Piece;
use dojo_rules::{Game, GameRecord, GameState, MoveError};
use report::{Rejection, Report};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dojo-replay")]
#[command(about = "Replay coordinate moves through the chess rules engine")]
struct Cli {
    /// Config file (defaults to dojo.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Start position in FEN
    #[arg(long)]
    fen: Option<String>,
    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Piece for pawns reaching the last rank without a suffix (q, r, b or n)
    #[arg(short, long)]
    promotion: Option<char>,
    /// Moves in coordinate form, e.g. e2e4 e7e5 or e7e8q
    moves: Vec<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration.
    fn merge_into(&self, mut config: ReplayConfig) -> ReplayConfig {
        if let Some(fen) = &self.fen {
            config.fen = Some(fen.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(promotion) = self.promotion {
            config.promotion = promotion;
        }
        config
    }
}

/// Plays one move, resolving a promotion pause with `default_promotion`.
fn replay_move(
    record: &mut GameRecord,
    text: &str,
    default_promotion: Piece,
) -> Result<(), MoveError> {
    let game = record.play_uci(text)?;
    if matches!(game.state(), GameState::AwaitingPromotion { .. }) {
        record.promote(default_promotion)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let config = cli.merge_into(ReplayConfig::load(cli.config.as_deref())?);
    let default_promotion = config.promotion_piece()?;

    let start = match &config.fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("Invalid start position '{}'", fen))?,
        None => Game::new(),
    };
    tracing::debug!("Replaying {} moves from {}", cli.moves.len(), start.to_fen());

    let mut record = GameRecord::from_game(start);
    let mut rejected = None;
    for (i, text) in cli.moves.iter().enumerate() {
        if let Err(e) = replay_move(&mut record, text, default_promotion) {
            rejected = Some(Rejection {
                index: i + 1,
                input: text.clone(),
                reason: e.to_string(),
            });
            break;
        }
    }

    let report = Report::new(&record, rejected);
    match config.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(r) = report.rejection() {
        bail!("Move {} '{}' rejected: {}", r.index, r.input, r.reason);
    }
    Ok(())
}
