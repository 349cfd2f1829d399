//! Colony inspiration debug panel
//!
//! Run with: cargo run -p viz
//!
//! Examples:
//!   cargo run -p viz -- --open --colonists 10
//!   cargo run -p viz -- --config panel.toml --catalog inspirations.toml

use bevy::prelude::*;
use clap::Parser;
use inspiration_panel::{default_config_toml, PanelConfig};
use std::path::PathBuf;
use viz::colony::ColonySetup;
use viz::panel::PanelSettings;
use viz::InspirationVizPlugin;

/// Colony inspiration debug panel
#[derive(Parser, Debug)]
#[command(name = "viz")]
#[command(about = "Grant and remove colonist inspirations from a debug window")]
struct Args {
    /// Panel config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Inspiration catalog file (TOML or JSON)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Number of player colonists to spawn
    #[arg(long, default_value_t = 6)]
    colonists: usize,

    /// Random seed for colonist generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Open the panel on launch
    #[arg(long)]
    open: bool,

    /// Print the default config and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    let args = Args::parse();

    if args.print_config {
        print!("{}", default_config_toml());
        return;
    }

    let config = match &args.config {
        Some(path) => match PanelConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PanelConfig::default(),
    };

    let setup = ColonySetup {
        catalog: args.catalog,
        colonists: args.colonists,
        seed: args.seed,
        open_panel: args.open,
    };

    App::new()
        .insert_resource(PanelSettings(config))
        .insert_resource(setup)
        .add_plugins(InspirationVizPlugin)
        .run();
}
