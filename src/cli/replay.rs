//! Replay subcommand - step through the story without a window.

use std::path::PathBuf;

use clap::Parser;

use crate::navigation::{CameraAnimationRequest, Explorer, SyncOutcome, ZoomLevel};

/// Replay the story of a dataset file.
#[derive(Parser)]
pub struct ReplayCommand {
    /// Path to the dataset JSON file (channels, entities, story).
    pub input: PathBuf,
}

/// What one beat did.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayStep {
    pub beat_id: String,
    pub outcome: SyncOutcome,
    pub level: ZoomLevel,
    pub breadcrumbs: Vec<String>,
    pub camera: Option<CameraAnimationRequest>,
}

/// Drive the explorer through every beat in order, draining the camera
/// mailbox after each one the way a renderer would.
pub fn replay_story(explorer: &mut Explorer) -> Vec<ReplayStep> {
    explorer.set_story_mode(true);
    explorer.take_pending_animation();

    let ids: Vec<String> = explorer
        .story()
        .beats()
        .iter()
        .map(|b| b.id.clone())
        .collect();

    ids.into_iter()
        .enumerate()
        .map(|(index, beat_id)| {
            let outcome = explorer.set_beat_index(Some(index));
            ReplayStep {
                beat_id,
                outcome,
                level: explorer.navigation().level,
                breadcrumbs: explorer.navigation().breadcrumbs(),
                camera: explorer.take_pending_animation(),
            }
        })
        .collect()
}

impl ReplayCommand {
    /// Run the replay command.
    pub fn run(self) -> color_eyre::Result<()> {
        let (mut explorer, _) = super::load_explorer(&self.input)?;

        for (index, step) in replay_story(&mut explorer).iter().enumerate() {
            let camera = step
                .camera
                .map(|c| format!("camera -> {:?} looking at {:?}", c.target, c.look_at))
                .unwrap_or_else(|| "camera unchanged".to_string());
            println!(
                "{:>3}. {:<20} {:<28} {} {} | {}",
                index + 1,
                step.beat_id,
                format!("{:?}", step.outcome),
                step.level.tier(),
                step.breadcrumbs.join(" > "),
                camera
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Dataset;

    #[test]
    fn test_replay_story() {
        let json = r#"{
            "channels": [{"id": "email", "name": "Email"}],
            "entities": [
                {"id": "h1", "channel": "email", "position": [2, 0, 0]},
                {"id": "h2", "channel": "email", "position": [4, 0, 0]}
            ],
            "story": [
                {"id": "intro", "level": "L1"},
                {"id": "legacy"},
                {"id": "email", "level": "L2", "channelContext": "email"},
                {"id": "wave", "level": "L3", "channelContext": "email", "campaignContext": "C001",
                 "cameraTarget": [3, 30, 40], "cameraLookAt": [3, 0, 0]}
            ]
        }"#;
        let dataset = Dataset::from_json(json).unwrap();
        let mut explorer = Explorer::from_dataset(dataset, &Config::default()).unwrap();

        let steps = replay_story(&mut explorer);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].outcome, SyncOutcome::AlreadyThere);
        assert_eq!(steps[1].outcome, SyncOutcome::Skipped);
        assert!(steps[1].camera.is_none());
        assert_eq!(
            steps[2].outcome,
            SyncOutcome::Navigated(ZoomLevel::Campaign)
        );
        assert_eq!(steps[2].breadcrumbs, vec!["Ecosystem", "Email"]);
        assert_eq!(steps[2].level.tier(), "L2");
        assert_eq!(steps[3].level.tier(), "L3");
        assert_eq!(
            steps[3].breadcrumbs,
            vec!["Ecosystem", "Email", "ONC Launch Wave 1"]
        );

        let camera = steps[3].camera.unwrap();
        assert_eq!(camera.target.x, 3.0);
        assert_eq!(camera.look_at.x, 3.0);
    }
}
