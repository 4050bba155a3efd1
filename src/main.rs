use anyhow::{Context, Result};
use clap::Parser;
use hotel_reservation::{Hotel, HotelConfig, Shell};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hotel_reservation", about = "Interactive hotel booking desk")]
struct Args {
    /// JSON file with the room inventory (defaults to the built-in five rooms)
    #[arg(long)]
    inventory: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_reservation=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let hotel = match &args.inventory {
        Some(path) => {
            let config = HotelConfig::from_json_file(path)
                .with_context(|| format!("loading inventory from {}", path.display()))?;
            Hotel::with_config(config)?
        }
        None => Hotel::new(),
    };
    info!(name = hotel.name(), rooms = hotel.rooms().len(), "hotel ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(hotel, stdin.lock(), stdout.lock());
    shell.run()
}
