//! Click-to-drill selection.

use bevy::prelude::*;

use crate::navigation::ZoomLevel;
use crate::visualization::components::EntityNode;
use crate::visualization::constants::{ENTITY_RADIUS, HIT_RADIUS_SCALE};
use crate::visualization::resources::ExplorerRes;

/// Left-click an entity to drill down.
///
/// At L1 a click selects the entity's channel. Inside a channel, a click
/// on one of its entities drills to L3; a click on another channel's
/// entity switches channel.
pub fn click_select_system(
    mut explorer: ResMut<ExplorerRes>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    node_query: Query<(&Transform, &EntityNode)>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || explorer.0.story_mode() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    // Find closest node hit by ray
    let hit_radius = ENTITY_RADIUS * HIT_RADIUS_SCALE;
    let mut closest: Option<(f32, &EntityNode)> = None;
    for (transform, node) in node_query.iter() {
        let to_node = transform.translation - ray.origin;
        let t = to_node.dot(*ray.direction);
        if t <= 0.0 {
            continue;
        }
        let closest_point = ray.origin + *ray.direction * t;
        let distance = (closest_point - transform.translation).length();
        if distance < hit_radius && closest.map_or(true, |(best, _)| t < best) {
            closest = Some((t, node));
        }
    }

    let Some((_, node)) = closest else {
        return;
    };

    let ctx = explorer.0.navigation();
    let inside_channel = ctx.level != ZoomLevel::Ecosystem
        && ctx.channel_id.as_deref() == Some(node.channel.as_str());
    if inside_channel {
        explorer.0.select_entity(&node.id);
    } else {
        explorer.0.select_channel(&node.channel);
    }
}
