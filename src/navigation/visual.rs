//! Per-entity opacity and highlight derived from the focused channel.

use crate::models::VisualState;

/// Opacity of entities outside the focused channel.
pub const DIMMED_OPACITY: f32 = 0.2;

/// How one entity should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFocus {
    pub opacity: f32,
    pub highlighted: bool,
    pub warning: bool,
}

impl VisualFocus {
    pub const NEUTRAL: Self = Self {
        opacity: 1.0,
        highlighted: false,
        warning: false,
    };
}

/// Pure mapping from focus state to an entity's appearance.
pub fn visual_focus(
    entity_channel: &str,
    focus_channel: Option<&str>,
    visual_state: Option<VisualState>,
) -> VisualFocus {
    match focus_channel {
        None => VisualFocus::NEUTRAL,
        Some(focus) if focus == entity_channel => VisualFocus {
            opacity: 1.0,
            highlighted: true,
            warning: visual_state.is_some_and(VisualState::is_alert),
        },
        Some(_) => VisualFocus {
            opacity: DIMMED_OPACITY,
            highlighted: false,
            warning: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_focus_no_dimming() {
        assert_eq!(
            visual_focus("email", None, None),
            VisualFocus {
                opacity: 1.0,
                highlighted: false,
                warning: false
            }
        );
        assert_eq!(
            visual_focus("email", None, Some(VisualState::Critical)),
            VisualFocus::NEUTRAL
        );
    }

    #[test]
    fn test_focused_channel_highlighted() {
        assert_eq!(
            visual_focus("email", Some("email"), Some(VisualState::Critical)),
            VisualFocus {
                opacity: 1.0,
                highlighted: true,
                warning: true
            }
        );
        assert!(
            visual_focus("email", Some("email"), Some(VisualState::Warning)).warning
        );
        assert!(
            !visual_focus("email", Some("email"), Some(VisualState::Highlight)).warning
        );
        assert!(!visual_focus("email", Some("email"), None).warning);
    }

    #[test]
    fn test_other_channels_dimmed() {
        assert_eq!(
            visual_focus("social", Some("email"), Some(VisualState::Critical)),
            VisualFocus {
                opacity: 0.2,
                highlighted: false,
                warning: false
            }
        );
    }

    #[test]
    fn test_deterministic_over_inputs() {
        let channels = ["email", "social", "web", ""];
        let states = [
            None,
            Some(VisualState::Normal),
            Some(VisualState::Highlight),
            Some(VisualState::Warning),
            Some(VisualState::Critical),
        ];
        for entity in channels {
            for focus in channels.iter().map(|c| Some(*c)).chain([None]) {
                for state in states {
                    let a = visual_focus(entity, focus, state);
                    assert_eq!(a, visual_focus(entity, focus, state));
                    assert!(!a.warning || a.highlighted);
                    assert!(
                        a.opacity == 1.0 || (a.opacity == DIMMED_OPACITY && !a.highlighted)
                    );
                }
            }
        }
    }
}
