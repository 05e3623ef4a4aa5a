//! Visual constants for the explorer scene.

use bevy::prelude::*;

use crate::models::Channel;

// =============================================================================
// Scene Colors
// =============================================================================

/// Background color.
pub const COLOR_BACKGROUND: Color = Color::srgb(0.06, 0.07, 0.1);
/// Tint applied to entities of a channel in warning/critical state (Red).
pub const COLOR_WARNING: Color = Color::srgb(0.95, 0.26, 0.21); // #F44336

/// Fallback channel colors when the data layer supplies none.
pub const CHANNEL_PALETTE: [Color; 6] = [
    Color::srgb(0.29, 0.56, 0.85), // #4A90D9
    Color::srgb(0.36, 0.72, 0.36), // #5CB85C
    Color::srgb(1.0, 0.64, 0.2),
    Color::srgb(0.6, 0.4, 0.8),
    Color::srgb(0.3, 0.7, 0.9),
    Color::srgb(0.8, 0.3, 0.5),
];

// =============================================================================
// Entity Sizing
// =============================================================================

/// Entity sphere radius.
pub const ENTITY_RADIUS: f32 = 1.2;
/// Click hit radius multiplier (slightly larger than visual).
pub const HIT_RADIUS_SCALE: f32 = 1.8;
/// Emissive multiplier for highlighted entities.
pub const HIGHLIGHT_GLOW: f32 = 1.5;

// =============================================================================
// Helpers
// =============================================================================

/// Color for a channel: registry color if present, else a stable palette slot.
pub fn channel_color(channel_id: &str, channel: Option<&Channel>) -> Color {
    if let Some([r, g, b]) = channel.and_then(|c| c.color) {
        return Color::srgb(r, g, b);
    }
    let slot = channel_id
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    CHANNEL_PALETTE[slot % CHANNEL_PALETTE.len()]
}
