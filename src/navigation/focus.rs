//! Focus context and the resolver that turns it into a camera target.

use bevy::math::Vec3;
use serde::Serialize;

use super::camera::CameraSettings;
use super::centroid::CentroidEngine;
use super::state::NavigationContext;
use super::zoom::ZoomLevel;
use crate::models::{EntitySet, StoryBeat};

/// What the camera is framing.
///
/// Non-global variants always carry a target id and a centroid; the
/// centroid is the cached fallback used when live data is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FocusContext {
    #[default]
    Global,
    /// A channel cluster.
    Channel { target_id: String, centroid: Vec3 },
    /// A single entity, framed around its parent cluster.
    Hcp { target_id: String, centroid: Vec3 },
}

impl FocusContext {
    pub fn is_global(&self) -> bool {
        matches!(self, FocusContext::Global)
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            FocusContext::Global => None,
            FocusContext::Channel { target_id, .. } | FocusContext::Hcp { target_id, .. } => {
                Some(target_id.as_str())
            }
        }
    }

    pub fn centroid(&self) -> Vec3 {
        match self {
            FocusContext::Global => Vec3::ZERO,
            FocusContext::Channel { centroid, .. } | FocusContext::Hcp { centroid, .. } => {
                *centroid
            }
        }
    }
}

/// Where the camera should go, and what to call it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorientTarget {
    pub label: String,
    pub target_position: Vec3,
    pub target_look_at: Vec3,
}

/// Everything the resolver looks at for one reorientation.
#[derive(Debug, Clone, Copy)]
pub struct ReorientInput<'a> {
    pub story_mode_active: bool,
    pub current_beat: Option<&'a StoryBeat>,
    pub focus: &'a FocusContext,
    pub zoom_level: ZoomLevel,
    pub navigation: &'a NavigationContext,
    pub entities: &'a EntitySet,
}

/// Decides what the camera should frame.
///
/// Priority: story beat, then channel focus (live centroid), then hcp
/// focus (stored cluster centroid), then the global overview.
#[derive(Debug, Clone, Default)]
pub struct FocusContextResolver {
    settings: CameraSettings,
    centroids: CentroidEngine,
}

impl FocusContextResolver {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            settings,
            centroids: CentroidEngine::new(),
        }
    }

    /// Live centroid of a channel, shared with callers building focus contexts.
    pub fn channel_centroid(&mut self, entities: &EntitySet, channel: &str) -> Option<Vec3> {
        self.centroids.channel_centroid(entities, channel)
    }

    pub fn resolve(&mut self, input: &ReorientInput<'_>) -> ReorientTarget {
        if input.story_mode_active {
            return self.story_target(input.current_beat);
        }

        match input.focus {
            FocusContext::Channel {
                target_id,
                centroid,
            } => {
                let live = self.centroids.channel_centroid(input.entities, target_id);
                if live.is_none() {
                    tracing::debug!(
                        "channel {} has no live entities, using cached centroid",
                        target_id
                    );
                }
                let anchor = live.unwrap_or(*centroid);
                let label = input
                    .navigation
                    .channel_label
                    .clone()
                    .filter(|_| input.navigation.channel_id.as_deref() == Some(target_id.as_str()))
                    .unwrap_or_else(|| target_id.clone());
                self.framed(label, anchor, input.zoom_level)
            }
            FocusContext::Hcp {
                target_id,
                centroid,
            } => {
                let label = input
                    .entities
                    .get(target_id)
                    .map(|e| e.display_name().to_string())
                    .or_else(|| input.navigation.campaign_label.clone())
                    .unwrap_or_else(|| target_id.clone());
                self.framed(label, *centroid, input.zoom_level)
            }
            FocusContext::Global => ReorientTarget {
                label: "Ecosystem".to_string(),
                target_position: self.settings.framing(Vec3::ZERO, ZoomLevel::Ecosystem),
                target_look_at: Vec3::ZERO,
            },
        }
    }

    fn story_target(&self, beat: Option<&StoryBeat>) -> ReorientTarget {
        let default_position = self.settings.framing(Vec3::ZERO, ZoomLevel::Ecosystem);
        match beat {
            Some(beat) => ReorientTarget {
                label: beat.title.clone().unwrap_or_else(|| beat.id.clone()),
                target_position: beat.camera_target.unwrap_or(default_position),
                target_look_at: beat.camera_look_at.unwrap_or(Vec3::ZERO),
            },
            None => ReorientTarget {
                label: "Story".to_string(),
                target_position: default_position,
                target_look_at: Vec3::ZERO,
            },
        }
    }

    fn framed(&self, label: String, anchor: Vec3, level: ZoomLevel) -> ReorientTarget {
        ReorientTarget {
            label,
            target_position: self.settings.framing(anchor, level),
            target_look_at: anchor,
        }
    }
}
