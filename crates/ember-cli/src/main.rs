//! Ember CLI - headless driver for the fireworks simulation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, simulate};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Procedural fireworks renderer core, driven headless", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scene for a number of frames on a simulated clock
    Simulate {
        /// Number of frames to render
        #[arg(long, default_value = "600")]
        frames: u32,

        /// Simulated frame rate
        #[arg(long, default_value = "60", value_parser = parse_fps)]
        fps: u32,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f32,

        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Write the last frame's geometry to this JSON file
        #[arg(long)]
        dump: Option<String>,
    },

    /// Print the default configuration as TOML
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_fps(s: &str) -> Result<u32, String> {
    let fps: u32 = s.parse().map_err(|e| format!("invalid fps: {}", e))?;
    if fps == 0 {
        return Err("fps must be at least 1".to_string());
    }
    Ok(fps)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Simulate {
            frames,
            fps,
            width,
            height,
            config,
            seed,
            dump,
        } => simulate::run(simulate::SimulateArgs {
            frames,
            fps,
            width,
            height,
            config,
            seed,
            dump,
        }),
        Commands::Config { output } => config::run(output.as_deref()),
    }
}
