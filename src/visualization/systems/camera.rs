//! Camera animation: drains the explorer's mailbox and eases the camera.

use bevy::prelude::*;

use crate::visualization::resources::{CameraRig, ExplorerRes};

/// Drain at most one camera request per frame and animate toward it.
///
/// A new request restarts interpolation from the live pose, superseding
/// whatever was in flight.
pub fn camera_animation_system(
    mut explorer: ResMut<ExplorerRes>,
    mut rig: ResMut<CameraRig>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    time: Res<Time>,
) {
    // Only touch the explorer mutably when there is something to drain
    if explorer.0.has_pending_animation() {
        if let Some(request) = explorer.0.take_pending_animation() {
            rig.start(request);
        }
    }

    if !rig.is_animating() {
        return;
    }
    rig.advance(time.delta_secs());

    if let Ok(mut transform) = camera_query.get_single_mut() {
        *transform = Transform::from_translation(rig.position).looking_at(rig.look_at, Vec3::Y);
    }
}
