//! Retrace CLI
//!
//! Runs a recording session headlessly: input comes from a script file,
//! render calls and exports go to stdout (or an export file).

mod config;
mod driver;
mod inspect;
mod keymap;
mod script;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use retrace_recorder::{export, CaptureController};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::RetraceConfig;
use crate::driver::Driver;
use crate::inspect::PathSummary;
use crate::keymap::Keymap;

#[derive(Parser)]
#[command(name = "retrace")]
#[command(author, version, about = "Record and replay pointer paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an input script through a recording session
    Run {
        /// Script file (JSON array of input events)
        script: PathBuf,

        /// Config file (defaults to ./retrace.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed the session with a previously exported path
        #[arg(short, long)]
        load: Option<PathBuf>,

        /// Write exports to this file instead of stdout
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Write a default retrace.toml into a directory
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Summarize an exported path
    Inspect {
        /// Exported path file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            script,
            config,
            load,
            export,
        } => cmd_run(&script, config.as_deref(), load.as_deref(), export),
        Commands::Init { path } => cmd_init(&path),
        Commands::Inspect { file } => cmd_inspect(&file),
    }
}

fn cmd_run(
    script_path: &Path,
    config_path: Option<&Path>,
    load: Option<&Path>,
    export_path: Option<PathBuf>,
) -> Result<()> {
    let config = RetraceConfig::load(config_path)?;
    let keymap = Keymap::from_config(&config.keys)?;
    for (chord, command) in keymap.bindings() {
        debug!("{} -> {}", chord, command);
    }
    let events = script::load(script_path)?;

    let mut controller = CaptureController::new(config.capture_config());
    if let Some(path) = load {
        controller.load(read_export(path)?);
    }

    info!("Running {} events from {}", events.len(), script_path.display());

    let stdout = io::stdout();
    let stats = Driver::new(controller, keymap, stdout.lock())
        .with_export_path(export_path)
        .run(events)?;

    info!(
        "Done: {} ticks, {} samples recorded, {} replays, {} exports",
        stats.ticks, stats.samples, stats.replays, stats.exports
    );
    Ok(())
}

fn cmd_init(dir: &Path) -> Result<()> {
    let target = RetraceConfig::write_default(dir)?;
    info!("Created {}", target.display());
    Ok(())
}

fn cmd_inspect(path: &Path) -> Result<()> {
    let buffer = read_export(path)?;
    println!("{}", PathSummary::of(&buffer));
    Ok(())
}

fn read_export(path: &Path) -> Result<retrace_recorder::PathBuffer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    export::from_json(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
