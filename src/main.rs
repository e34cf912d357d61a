use anyhow::{Context, Result};
use arbiter_core::{Geometry, Position};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("arbiter starting");

    let geo = Geometry::build();
    let mut position = match std::env::args().nth(1) {
        Some(fen) => fen
            .parse::<Position>()
            .with_context(|| format!("failed to load position \"{fen}\""))?,
        None => Position::starting(),
    };
    info!(fen = %position, "position loaded");

    println!("{}", position.pretty());

    let us = position.side_to_move();
    let moves = position.generate_all_moves(&geo, us);
    let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
    info!(side = us.name(), count = moves.len(), moves = %listed.join(" "), "legal moves");
    let status = position.status(&geo);
    info!(%status, over = status.is_over(), "game status");
    Ok(())
}
