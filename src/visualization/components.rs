//! ECS components for the explorer scene.

use bevy::prelude::*;

/// Sphere mesh representing one data entity.
#[derive(Component)]
pub struct EntityNode {
    /// Id of the entity in the explorer's entity set.
    pub id: String,
    /// Channel the entity belongs to.
    pub channel: String,
    /// Unfocused color, before opacity and glow are applied.
    pub base_color: Color,
}

/// Breadcrumb trail text (top left).
#[derive(Component)]
pub struct BreadcrumbText;

/// Story beat title and narration (bottom).
#[derive(Component)]
pub struct BeatCaptionText;
