//! Camera animation requests and the single-slot mailbox that holds them.
//!
//! Producers (reorientation, zoom stepping, story beats) overwrite the slot;
//! the renderer drains it at most once per frame. Only the latest intent is
//! ever animated, and a new request supersedes whatever is in flight.

use bevy::math::Vec3;

use super::zoom::{DistanceTable, ZoomLevel};

/// A concrete camera move for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimationRequest {
    /// Final camera position.
    pub target: Vec3,
    /// Point the camera looks at when it arrives.
    pub look_at: Vec3,
    pub duration_seconds: f32,
}

/// Distances, framing offset and durations used to build requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub distances: DistanceTable,
    /// Height of the camera above its look-at point.
    pub height_offset: f32,
    pub reorient_duration: f32,
    pub zoom_duration: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distances: DistanceTable::default(),
            height_offset: 30.0,
            reorient_duration: 0.5,
            zoom_duration: 0.8,
        }
    }
}

impl CameraSettings {
    /// Camera position framing `anchor` at the distance for `level`.
    pub fn framing(&self, anchor: Vec3, level: ZoomLevel) -> Vec3 {
        anchor + Vec3::new(0.0, self.height_offset, self.distances.distance(level))
    }
}

/// Single-slot, last-writer-wins mailbox of camera requests.
#[derive(Debug, Clone, Default)]
pub struct CameraAnimationBroker {
    settings: CameraSettings,
    pending: Option<CameraAnimationRequest>,
    /// Look-at point of the most recent request; level requests frame it.
    anchor: Vec3,
    issued: u64,
}

impl CameraAnimationBroker {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Request the framing distance of `level` around the current anchor.
    pub fn request_by_level(&mut self, level: ZoomLevel) -> CameraAnimationRequest {
        let request = CameraAnimationRequest {
            target: self.settings.framing(self.anchor, level),
            look_at: self.anchor,
            duration_seconds: self.settings.zoom_duration,
        };
        self.set_pending(request);
        request
    }

    /// Request an explicit camera pose.
    pub fn request_by_target(
        &mut self,
        target: Vec3,
        look_at: Vec3,
        duration_seconds: f32,
    ) -> CameraAnimationRequest {
        let request = CameraAnimationRequest {
            target,
            look_at,
            duration_seconds,
        };
        self.anchor = look_at;
        self.set_pending(request);
        request
    }

    /// The request waiting to be drained, if any.
    pub fn pending(&self) -> Option<&CameraAnimationRequest> {
        self.pending.as_ref()
    }

    /// Drain the slot. A second call without a new request returns None.
    pub fn take(&mut self) -> Option<CameraAnimationRequest> {
        self.pending.take()
    }

    /// Total requests issued, including ones overwritten before draining.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    fn set_pending(&mut self, request: CameraAnimationRequest) {
        if self.pending.is_some() {
            tracing::debug!("camera request superseded before being drained");
        }
        tracing::debug!(
            "camera request: target={:?} look_at={:?} duration={}s",
            request.target,
            request.look_at,
            request.duration_seconds
        );
        self.pending = Some(request);
        self.issued += 1;
    }
}
