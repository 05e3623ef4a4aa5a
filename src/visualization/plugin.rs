//! Explorer plugin for Bevy.

use bevy::prelude::*;
use std::sync::Mutex;

use super::resources::{CameraRig, ExplorerRes};
use super::setup::setup_scene;
use super::systems;
use crate::navigation::Explorer;

/// Plugin that adds the 3D explorer scene.
///
/// The `explorer` field uses `Mutex<Option<...>>` to allow moving
/// ownership into the resource during `build()` (which takes `&self`).
pub struct ExplorerPlugin {
    /// Navigation core (taken during build).
    pub explorer: Mutex<Option<Explorer>>,
}

impl ExplorerPlugin {
    /// Create a new explorer plugin.
    pub fn new(explorer: Explorer) -> Self {
        Self {
            explorer: Mutex::new(Some(explorer)),
        }
    }
}

impl Plugin for ExplorerPlugin {
    fn build(&self, app: &mut App) {
        // Take ownership of the explorer (moves it out, leaves None)
        let explorer = match self.explorer.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        let Some(explorer) = explorer else {
            tracing::error!("ExplorerPlugin built twice; explorer already taken");
            return;
        };

        // Only insert CameraRig if not already set (allows pre-configuration)
        app.init_resource::<CameraRig>()
            .insert_resource(ExplorerRes(explorer))
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    systems::keyboard_navigation_system,
                    systems::click_select_system,
                    systems::camera_animation_system,
                    systems::update_visual_focus_system,
                    systems::update_overlay_system,
                )
                    .chain(),
            );
    }
}
