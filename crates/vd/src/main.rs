//! vd: dungeon layout generator
//!
//! Generates a layout and prints an ASCII preview, the room graph, or the
//! whole result as JSON.

mod render;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::debug;
use strum::Display;

use vd_core::{GeneratorConfig, generate_with_config};

/// Which grid layer to preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
enum View {
    /// Tile types
    #[default]
    Type,
    /// Partition groups
    Partition,
    /// Both, side by side
    Both,
}

/// Dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "vd")]
#[command(author, version, about = "Generate a room-and-corridor dungeon layout", long_about = None)]
struct Args {
    /// Number of rooms
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Seed for a reproducible layout
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Placement draws allowed per room
    #[arg(long = "max-attempts")]
    max_attempts: Option<u32>,

    /// JSON config file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid layer to preview
    #[arg(long = "view", value_enum, default_value_t = View::Type)]
    view: View,

    /// List adjacency edges, marking spanning-tree edges with '*'
    #[arg(short = 'e', long = "edges")]
    edges: bool,

    /// Print the full result as JSON instead of a preview
    #[arg(long = "json")]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn generator_config(&self) -> Result<GeneratorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(attempts) = self.max_attempts {
            config.max_placement_attempts = attempts;
        }
        Ok(config)
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(&args) {
        eprintln!("vd: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.generator_config()?;
    debug!("config: {config:?}, view: {}", args.view);

    let dungeon = generate_with_config(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dungeon)?);
        return Ok(());
    }

    println!(
        "seed {}  rooms {}  grid {}x{}",
        dungeon.seed,
        dungeon.room_count(),
        dungeon.grid.size(),
        dungeon.grid.size()
    );
    let map = match args.view {
        View::Type => render::render_types(&dungeon.grid),
        View::Partition => render::render_partition(&dungeon.grid),
        View::Both => render::render_both(&dungeon.grid),
    };
    print!("{map}");

    if args.edges {
        println!();
        print!("{}", render::render_edges(&dungeon.graph));
    }

    for missing in &dungeon.unreachable {
        eprintln!("warning: {missing}");
    }

    Ok(())
}
