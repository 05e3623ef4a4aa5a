//! Explore subcommand - open the 3D explorer window.

use std::path::PathBuf;

use clap::Parser;

use crate::navigation::Explorer;
use crate::visualization::run_explorer;

/// Open the explorer on a dataset file.
#[derive(Parser)]
pub struct ExploreCommand {
    /// Path to the dataset JSON file (channels, entities, story).
    pub input: PathBuf,

    /// Start with the guided tour running.
    #[arg(long)]
    pub story: bool,

    /// Channel to open directly at L2.
    #[arg(long)]
    pub channel: Option<String>,
}

impl ExploreCommand {
    /// Run the explore command.
    pub fn run(self) -> color_eyre::Result<()> {
        let (mut explorer, config) = super::load_explorer(&self.input)?;
        prepare(&mut explorer, self.channel.as_deref(), self.story);

        tracing::info!("Starting explorer window");
        run_explorer(explorer, &config.window);
        Ok(())
    }
}

/// Apply the startup flags: open at a channel, then start the tour on its
/// first beat.
fn prepare(explorer: &mut Explorer, channel: Option<&str>, story: bool) {
    if let Some(channel) = channel {
        explorer.select_channel(channel);
    }
    if story {
        explorer.set_story_mode(true);
        explorer.set_beat_index(Some(0));
    }
}
