//! ECS systems for the explorer.
//!
//! Systems are functions that operate on components and resources each frame.

pub mod camera;
pub mod interaction;
pub mod keyboard;
pub mod ui;
pub mod visual;

pub use camera::camera_animation_system;
pub use interaction::click_select_system;
pub use keyboard::keyboard_navigation_system;
pub use ui::update_overlay_system;
pub use visual::update_visual_focus_system;
