mod core;
mod renderer;
mod shared;
mod ui;
mod utils;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::Path;

use crate::core::{GridSize, Mode, Session};
use crate::shared::{config, constants};
use crate::utils::logger;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Default)]
struct SketchArgs {
    /// Squares per side (1-100, larger values are clamped)
    #[arg(short, long, value_parser = config::parse_size_arg)]
    size: Option<GridSize>,
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw in the terminal by moving the mouse over the grid (default)
    Draw {
        #[command(flatten)]
        sketch: SketchArgs,
    },
    /// Apply hovers without a terminal and print the resulting grid as JSON
    Simulate {
        #[command(flatten)]
        sketch: SketchArgs,
        /// Cell to hover, as ROW,COL; may be repeated
        #[arg(short = 'H', long = "hover", value_parser = ui::simulate::parse_hover)]
        hovers: Vec<(usize, usize)>,
        /// Replay the hover list this many times
        #[arg(short, long, default_value_t = 1)]
        repeat: usize,
        /// Seed for Random mode
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    logger::init();

    // Leftovers from a crashed run; failures just mean the terminal was fine
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stderr(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    );

    let cli = Cli::parse();
    let file_config = config::read_config(Path::new(constants::CONFIG_FILE));

    let command = cli.command.unwrap_or(Commands::Draw {
        sketch: SketchArgs::default(),
    });

    match command {
        Commands::Draw { sketch } => {
            let settings = config::resolve_settings(sketch.size, sketch.mode, &file_config);
            ui::interactive::run_sketch(Session::new(settings, rand::thread_rng()))?;
        }
        Commands::Simulate {
            sketch,
            hovers,
            repeat,
            seed,
        } => {
            let settings = config::resolve_settings(sketch.size, sketch.mode, &file_config);
            ui::simulate::run_simulation(settings, &hovers, repeat, seed)?;
        }
    }

    Ok(())
}
