//! Generation and validation tooling for roadgeom map containers.

mod overlays;
mod profile;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roadgeom-tools", version, about = "Map container tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load every feature of a container through the file-backed loader and
    /// report road statistics.
    Validate {
        /// Container document to validate.
        #[arg(long)]
        map: PathBuf,
        /// Vehicle profile (TOML).
        #[arg(long)]
        profile: PathBuf,
        /// Road cache capacity used for the pass.
        #[arg(long, default_value_t = 4096)]
        cache_size: usize,
    },
    /// Build optional overlay sections from CSV inputs and write them into a
    /// container document.
    Overlays {
        /// Container document to extend.
        #[arg(long)]
        map: PathBuf,
        /// CSV with columns id,forward_km_h,backward_km_h.
        #[arg(long)]
        maxspeeds: Option<PathBuf>,
        /// CSV with a single id column.
        #[arg(long)]
        city_roads: Option<PathBuf>,
        /// Output path for the extended document.
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate {
            map,
            profile,
            cache_size,
        } => validate::run(&map, &profile, cache_size),
        Command::Overlays {
            map,
            maxspeeds,
            city_roads,
            out,
        } => overlays::run(&map, maxspeeds.as_deref(), city_roads.as_deref(), &out),
    }
}
