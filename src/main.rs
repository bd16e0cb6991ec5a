//! Plays a game between two configured players in the terminal.
//!
//! Usage: `chess_minimax [WHITE] [BLACK] [MAX_PLIES]`
//!
//! WHITE and BLACK are `easy`, `medium`, `hard`, `random` or `random:<seed>`.
//! Set `RUST_LOG=debug` to follow the game ply by ply with search statistics.

use std::error::Error;

use chess_minimax::config::GameConfig;
use chess_minimax::orchestrator::Orchestrator;

fn parse_args() -> Result<GameConfig, Box<dyn Error>> {
    let mut config = GameConfig::default();
    let mut args = std::env::args().skip(1);

    if let Some(white) = args.next() {
        config.white = white.parse()?;
    }
    if let Some(black) = args.next() {
        config.black = black.parse()?;
    }
    if let Some(max_plies) = args.next() {
        config.max_plies = Some(max_plies.parse()?);
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = parse_args()?;
    println!("White: {}  Black: {}", config.white, config.black);

    let mut orchestrator = Orchestrator::from_config(&config);
    let summary = orchestrator.run(config.max_plies)?;

    for (ply, mv) in summary.moves.iter().enumerate() {
        println!("{}. {}", ply + 1, mv);
    }
    println!("{}", orchestrator.board());
    println!("{}", summary);

    Ok(())
}
