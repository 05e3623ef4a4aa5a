//! Discrete zoom levels and the controller that steps between them.

use serde::{Deserialize, Serialize};

use super::camera::CameraAnimationBroker;

/// The three ordered detail tiers (L1 < L2 < L3).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ZoomLevel {
    /// L1: the whole ecosystem.
    #[default]
    Ecosystem,
    /// L2: one channel cluster.
    Campaign,
    /// L3: individual entities of a campaign.
    Hcp,
}

impl ZoomLevel {
    pub const ALL: [Self; 3] = [Self::Ecosystem, Self::Campaign, Self::Hcp];

    /// Next more detailed level, if any.
    pub fn deeper(self) -> Option<Self> {
        match self {
            Self::Ecosystem => Some(Self::Campaign),
            Self::Campaign => Some(Self::Hcp),
            Self::Hcp => None,
        }
    }

    /// Next less detailed level, if any.
    pub fn shallower(self) -> Option<Self> {
        match self {
            Self::Ecosystem => None,
            Self::Campaign => Some(Self::Ecosystem),
            Self::Hcp => Some(Self::Campaign),
        }
    }

    /// Short tier name shown in replay output.
    pub fn tier(self) -> &'static str {
        match self {
            Self::Ecosystem => "L1",
            Self::Campaign => "L2",
            Self::Hcp => "L3",
        }
    }
}

/// Camera distance per zoom level.
///
/// Construction guarantees ecosystem > campaign > hcp > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceTable {
    pub(crate) ecosystem: f32,
    pub(crate) campaign: f32,
    pub(crate) hcp: f32,
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self {
            ecosystem: 180.0,
            campaign: 90.0,
            hcp: 40.0,
        }
    }
}

impl DistanceTable {
    /// Returns None unless the distances strictly decrease and stay positive.
    pub fn new(ecosystem: f32, campaign: f32, hcp: f32) -> Option<Self> {
        (ecosystem > campaign && campaign > hcp && hcp > 0.0).then_some(Self {
            ecosystem,
            campaign,
            hcp,
        })
    }

    pub fn distance(&self, level: ZoomLevel) -> f32 {
        match level {
            ZoomLevel::Ecosystem => self.ecosystem,
            ZoomLevel::Campaign => self.campaign,
            ZoomLevel::Hcp => self.hcp,
        }
    }
}

/// Holds the current zoom level and steps it one tier at a time.
#[derive(Debug, Clone, Default)]
pub struct ZoomLevelController {
    level: ZoomLevel,
}

impl ZoomLevelController {
    pub fn new(level: ZoomLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    /// Step to the next more detailed level. No-op at L3.
    pub fn zoom_in(&mut self, broker: &mut CameraAnimationBroker) -> ZoomLevel {
        match self.level.deeper() {
            Some(next) => self.step(next, broker),
            None => {
                tracing::debug!("zoom in ignored: already at {:?}", self.level);
                self.level
            }
        }
    }

    /// Step to the next less detailed level. No-op at L1.
    pub fn zoom_out(&mut self, broker: &mut CameraAnimationBroker) -> ZoomLevel {
        match self.level.shallower() {
            Some(next) => self.step(next, broker),
            None => {
                tracing::debug!("zoom out ignored: already at {:?}", self.level);
                self.level
            }
        }
    }

    /// Jump directly to `level`, issuing a camera request if it changed.
    pub fn set_level(&mut self, level: ZoomLevel, broker: &mut CameraAnimationBroker) -> ZoomLevel {
        if level != self.level {
            self.step(level, broker);
        }
        self.level
    }

    /// Follow a level chosen by navigation, without a camera request of
    /// its own (the navigation's reorientation supplies the move).
    pub fn align(&mut self, level: ZoomLevel) {
        self.level = level;
    }

    fn step(&mut self, next: ZoomLevel, broker: &mut CameraAnimationBroker) -> ZoomLevel {
        tracing::debug!("zoom {:?} -> {:?}", self.level, next);
        self.level = next;
        broker.request_by_level(next);
        next
    }
}
