//! Overlay text: breadcrumb trail and story caption.

use bevy::prelude::*;

use crate::visualization::components::{BeatCaptionText, BreadcrumbText};
use crate::visualization::resources::ExplorerRes;

/// Refresh breadcrumb and caption text when explorer state changes.
pub fn update_overlay_system(
    explorer: Res<ExplorerRes>,
    mut breadcrumb_query: Query<&mut Text, (With<BreadcrumbText>, Without<BeatCaptionText>)>,
    mut caption_query: Query<&mut Text, (With<BeatCaptionText>, Without<BreadcrumbText>)>,
) {
    if !explorer.is_changed() {
        return;
    }
    let explorer = &explorer.0;

    if let Ok(mut text) = breadcrumb_query.get_single_mut() {
        let mut trail = explorer.navigation().breadcrumbs().join("  \u{203A}  ");
        if explorer.navigation().can_go_back() {
            trail.push_str("    [Esc: back]");
        }
        **text = trail;
    }

    if let Ok(mut text) = caption_query.get_single_mut() {
        **text = match explorer.current_beat().filter(|_| explorer.story_mode()) {
            Some(beat) => {
                let index = explorer.story().current_index().map_or(0, |i| i + 1);
                let total = explorer.story().beats().len();
                let title = beat.title.as_deref().unwrap_or(&beat.id);
                match beat.narration.as_deref() {
                    Some(narration) => format!("[{}/{}] {}\n{}", index, total, title, narration),
                    None => format!("[{}/{}] {}", index, total, title),
                }
            }
            None => String::new(),
        };
    }
}
