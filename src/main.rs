//! Head gesture detection: prints YES for a nod and NO for a head shake.

use anyhow::{Context, Result};
use clap::Parser;
use head_gesture_detection::{
    app::{AppConfig, GestureApp, InputSource},
    config::{Config, EXAMPLE_CONFIG},
    landmark_input::InputFormat,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark file to read (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input line format (points, mesh)
    #[arg(short, long)]
    format: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Number of frames analyzed per evaluation
    #[arg(short, long)]
    window_size: Option<usize>,

    /// Log frame counts and detections when the input ends
    #[arg(short, long)]
    summary: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Head Gesture Detection");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Command line overrides
    if let Some(format) = &args.format {
        config.input.format = format.parse::<InputFormat>()?;
    }
    if let Some(window_size) = args.window_size {
        config.gesture.window_size = window_size;
    }

    let app_config = AppConfig {
        input_source: match args.input {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        },
        config,
        summary: args.summary,
    };

    // Create and run application
    let mut app = GestureApp::new(app_config)?;
    app.run()?;

    Ok(())
}
