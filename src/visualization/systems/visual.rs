//! Applies per-entity visual focus to materials and positions.

use bevy::prelude::*;

use crate::visualization::components::EntityNode;
use crate::visualization::constants::{COLOR_WARNING, HIGHLIGHT_GLOW};
use crate::visualization::resources::ExplorerRes;

/// Update entity opacity, glow and position when explorer state changes.
pub fn update_visual_focus_system(
    explorer: Res<ExplorerRes>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut node_query: Query<(
        &EntityNode,
        &MeshMaterial3d<StandardMaterial>,
        &mut Transform,
        &mut Visibility,
    )>,
) {
    if !explorer.is_changed() {
        return;
    }
    let explorer = &explorer.0;

    for (node, material, mut transform, mut visibility) in node_query.iter_mut() {
        // Entities removed from the live set are hidden, not despawned
        let Some(entity) = explorer.entities().get(&node.id) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        *visibility = Visibility::Inherited;
        transform.translation = entity.position;

        let focus = explorer.visual_focus_for(entity);
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };

        let color = if focus.warning {
            COLOR_WARNING
        } else {
            node.base_color
        };
        material.base_color = color.with_alpha(focus.opacity);
        material.emissive = if focus.highlighted {
            let [r, g, b] = color.to_srgba().to_f32_array_no_alpha();
            LinearRgba::new(r * HIGHLIGHT_GLOW, g * HIGHLIGHT_GLOW, b * HIGHLIGHT_GLOW, 1.0)
        } else {
            LinearRgba::BLACK
        };
    }
}
