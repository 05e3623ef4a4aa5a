//! CLI module for Ecoscope.
//!
//! Subcommands:
//! - `explore`: Open the 3D explorer window on a dataset
//! - `replay`: Run the guided tour headless and print each step

mod explore;
mod replay;

use clap::{Parser, Subcommand};

pub use explore::ExploreCommand;
pub use replay::{replay_story, ReplayCommand, ReplayStep};

/// Ecoscope - 3D drill-down data explorer
#[derive(Parser)]
#[command(name = "ecoscope")]
#[command(about = "3D drill-down explorer - ecosystem, channel cluster and entity navigation")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the 3D explorer on a dataset JSON file
    Explore(ExploreCommand),

    /// Replay the dataset's story headless, printing navigation per beat
    Replay(ReplayCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Explore(cmd) => cmd.run(),
            Command::Replay(cmd) => cmd.run(),
        }
    }
}

/// Load and validate configuration, then the dataset at `path`.
fn load_explorer(
    path: &std::path::Path,
) -> color_eyre::Result<(crate::navigation::Explorer, crate::config::Config)> {
    let config = crate::config::Config::load()?;
    config.validate()?;

    let dataset = crate::models::Dataset::load(path)?;
    tracing::info!(
        "Loaded dataset {}: {} channels, {} entities, {} story beats",
        path.display(),
        dataset.channels.len(),
        dataset.entities.len(),
        dataset.story.len()
    );

    let explorer = crate::navigation::Explorer::from_dataset(dataset, &config)?;
    Ok((explorer, config))
}
