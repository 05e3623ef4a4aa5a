//! 3D explorer rendering using Bevy.
//!
//! The renderer is a consumer of the navigation core: it drains camera
//! requests, applies per-entity visual focus and feeds clicks and keys
//! back in as transitions.
//!
//! ## Module Structure
//!
//! - `components` - ECS components for entity nodes and UI text
//! - `resources` - ECS resources (explorer store, camera rig)
//! - `systems` - ECS systems (camera, interaction, keyboard, visual, UI)
//! - `setup` - Scene initialization
//! - `plugin` - Bevy plugin definition
//! - `constants` - Colors, sizes, and other constants

mod components;
mod constants;
mod plugin;
mod resources;
mod setup;
mod systems;

pub use plugin::ExplorerPlugin;
pub use resources::CameraRig;
pub use systems::keyboard::{host_shortcut, HostShortcut};

use bevy::prelude::*;

use crate::config::WindowConfig;
use crate::navigation::{Explorer, ZoomLevel};

/// Run the explorer window.
///
/// The function blocks until the window is closed.
pub fn run_explorer(mut explorer: Explorer, window: &WindowConfig) {
    let rig = startup_rig(&mut explorer);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: window.title.clone(),
                        resolution: (window.width, window.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                // tracing-subscriber is already installed by main
                .disable::<bevy::log::LogPlugin>(),
        )
        .insert_resource(ClearColor(constants::COLOR_BACKGROUND))
        .insert_resource(rig)
        .add_plugins(ExplorerPlugin::new(explorer))
        .run();
}

/// Camera rig for the first frame.
///
/// The rig rests on the overview and a reorient is queued, so the first
/// frame flies to whatever the explorer is already showing. Navigation is
/// left untouched.
pub(crate) fn startup_rig(explorer: &mut Explorer) -> CameraRig {
    let overview = explorer
        .camera_settings()
        .framing(Vec3::ZERO, ZoomLevel::Ecosystem);
    explorer.reorient();
    CameraRig::at(overview, Vec3::ZERO)
}
