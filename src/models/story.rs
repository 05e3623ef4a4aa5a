//! Story beats: one step each of the guided tour.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Navigation level a beat asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeatLevel {
    L1,
    L2,
    L3,
}

/// Severity a beat attaches to its focused channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    Highlight,
    Warning,
    Critical,
    /// Also used for any state name this build does not know.
    #[default]
    #[serde(other)]
    Normal,
}

impl VisualState {
    /// Whether this state should render as a warning.
    pub fn is_alert(self) -> bool {
        matches!(self, VisualState::Warning | VisualState::Critical)
    }
}

/// One step of a scripted tour.
///
/// Beats without `level` predate hierarchical navigation and carry no
/// navigation intent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryBeat {
    pub id: String,
    #[serde(default)]
    pub level: Option<BeatLevel>,
    /// Channel id for L2/L3 beats.
    #[serde(default)]
    pub channel_context: Option<String>,
    /// Campaign id for L3 beats.
    #[serde(default)]
    pub campaign_context: Option<String>,
    #[serde(default)]
    pub camera_target: Option<Vec3>,
    #[serde(default)]
    pub camera_look_at: Option<Vec3>,
    /// Channel to highlight while this beat is shown.
    #[serde(default)]
    pub channel_focus: Option<String>,
    #[serde(default)]
    pub visual_state: Option<VisualState>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub narration: Option<String>,
}
