//! ECS resources for explorer state.

use bevy::prelude::*;

use crate::navigation::{CameraAnimationRequest, Explorer};

/// The navigation core, owned by the app.
#[derive(Resource)]
pub struct ExplorerRes(pub Explorer);

/// Camera pose plus the animation currently in flight.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    /// Live camera position.
    pub position: Vec3,
    /// Live look-at point.
    pub look_at: Vec3,
    from: (Vec3, Vec3),
    to: (Vec3, Vec3),
    elapsed: f32,
    duration: f32,
}

impl CameraRig {
    /// A rig resting at the given pose.
    pub fn at(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            from: (position, look_at),
            to: (position, look_at),
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Start animating toward `request` from the live pose, replacing any
    /// animation in flight.
    pub fn start(&mut self, request: CameraAnimationRequest) {
        self.from = (self.position, self.look_at);
        self.to = (request.target, request.look_at);
        self.elapsed = 0.0;
        self.duration = request.duration_seconds;
        if self.duration <= 0.0 {
            self.position = request.target;
            self.look_at = request.look_at;
        }
    }

    /// Advance by `dt` seconds and update the live pose.
    pub fn advance(&mut self, dt: f32) {
        if !self.is_animating() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let t = self.elapsed / self.duration;
        // Smoothstep easing
        let eased = t * t * (3.0 - 2.0 * t);
        self.position = self.from.0.lerp(self.to.0, eased);
        self.look_at = self.from.1.lerp(self.to.1, eased);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::at(Vec3::new(0.0, 30.0, 180.0), Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(target: Vec3, duration_seconds: f32) -> CameraAnimationRequest {
        CameraAnimationRequest {
            target,
            look_at: Vec3::ZERO,
            duration_seconds,
        }
    }

    #[test]
    fn test_rig_reaches_target() {
        let mut rig = CameraRig::at(Vec3::ZERO, Vec3::ZERO);
        rig.start(request(Vec3::new(10.0, 0.0, 0.0), 0.5));

        rig.advance(0.25);
        assert!(rig.is_animating());
        assert!((rig.position.x - 5.0).abs() < 1e-4);

        rig.advance(1.0);
        assert!(!rig.is_animating());
        assert_eq!(rig.position, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_restart_from_live_pose() {
        let mut rig = CameraRig::at(Vec3::ZERO, Vec3::ZERO);
        rig.start(request(Vec3::new(10.0, 0.0, 0.0), 1.0));
        rig.advance(0.5);
        let midway = rig.position;

        rig.start(request(Vec3::new(0.0, 10.0, 0.0), 1.0));
        rig.advance(0.0);
        assert_eq!(rig.position, midway);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut rig = CameraRig::default();
        rig.start(request(Vec3::ONE, 0.0));
        assert_eq!(rig.position, Vec3::ONE);
        assert!(!rig.is_animating());
    }
}
