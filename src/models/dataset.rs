//! Dataset file: channels, entities and the story, loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Channel, ChannelRegistry, Entity, EntitySet, StoryBeat};
use crate::error::AppError;

/// Everything the explorer needs from the data layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub story: Vec<StoryBeat>,
}

impl Dataset {
    /// Read and validate a dataset file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a dataset from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reject entities that can never be navigated to.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(bad) = self
            .entities
            .iter()
            .find(|e| e.id.is_empty() || e.channel.is_empty())
        {
            return Err(AppError::InvalidDataset(format!(
                "entity '{}' must have a non-empty id and channel",
                bad.id
            )));
        }
        if let Some(bad) = self.story.iter().find(|b| b.id.is_empty()) {
            return Err(AppError::InvalidDataset(format!(
                "story beat {:?} must have an id",
                bad.title
            )));
        }
        Ok(())
    }

    /// Split into the pieces the explorer owns.
    pub fn into_parts(self) -> (ChannelRegistry, EntitySet, Vec<StoryBeat>) {
        (
            ChannelRegistry::new(self.channels),
            EntitySet::new(self.entities),
            self.story,
        )
    }
}
