//! Conquest CLI - interactive territorial conquest session
//!
//! One human player against the standard board: pick attacker and
//! defender territories, roll the dice, complete your secret mission.

use clap::Parser;
use conquest_core::faction_from_name;

mod play;

#[derive(Parser)]
#[command(name = "conquest")]
#[command(about = "Turn-based territorial conquest game")]
struct Cli {
    /// Player faction (azul, verde, vermelho, amarelo)
    #[arg(long, default_value = "azul")]
    player: String,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final session state as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let player = faction_from_name(&cli.player)
        .ok_or_else(|| anyhow::anyhow!("Unknown faction: {}", cli.player))?;

    play::run(player, cli.seed, cli.json)
}
