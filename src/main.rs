use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use connect_four::ai::{RandomStrategy, SearchStrategy, Strategy};
use connect_four::app::App;
use connect_four::config::{AppConfig, PlayerKind};
use connect_four::game::{Board, Player};
use connect_four::ui::HumanStrategy;

/// Play Connect Four on the console, any mix of human and computer seats.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax computer player")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override search depth (plies below the root)
    #[arg(long)]
    depth: Option<usize>,

    /// First player: human, minimax, alphabeta or random
    #[arg(long)]
    red: Option<String>,

    /// Second player: human, minimax, alphabeta or random
    #[arg(long)]
    yellow: Option<String>,
}

fn build_strategy(kind: PlayerKind, player: Player, depth: usize) -> Box<dyn Strategy> {
    match kind {
        PlayerKind::Human => Box::new(HumanStrategy::new(player)),
        PlayerKind::Minimax => Box::new(SearchStrategy::minimax(player, depth)),
        PlayerKind::AlphaBeta => Box::new(SearchStrategy::alpha_beta(player, depth)),
        PlayerKind::Random => Box::new(RandomStrategy::new(player)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(kind) = cli.red.as_deref() {
        config.players.red = PlayerKind::parse(kind)?;
    }
    if let Some(kind) = cli.yellow.as_deref() {
        config.players.yellow = PlayerKind::parse(kind)?;
    }
    config.validate()?;

    let board = Board::new(config.board.height, config.board.width);
    let red = build_strategy(config.players.red, Player::Red, config.search.depth);
    let yellow = build_strategy(config.players.yellow, Player::Yellow, config.search.depth);

    let mut app = App::new(board, red, yellow);
    app.run(&mut std::io::stdout())?;
    Ok(())
}
