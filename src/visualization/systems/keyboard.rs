//! Keyboard input: navigation keys plus host-level shortcuts.
//!
//! Navigation keys (Escape, Backspace, Home, Cmd/Ctrl+1) go through the
//! core [`KeyboardController`](crate::navigation::KeyboardController).
//! The host binds the remaining documented shortcuts itself:
//! - Cmd/Ctrl+0: reorient
//! - Cmd/Ctrl+= (or +): zoom in
//! - Cmd/Ctrl+-: zoom out
//! - T: toggle the guided tour
//! - Right/Left arrows: next/previous story beat

use bevy::prelude::*;

use crate::navigation::{Key, KeyContext, KeyEvent, Modifiers};
use crate::visualization::resources::ExplorerRes;

/// Shortcuts handled by the host rather than the navigation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostShortcut {
    Reorient,
    ZoomIn,
    ZoomOut,
    ToggleStory,
    NextBeat,
    PreviousBeat,
}

/// Map a key event to a host shortcut.
pub fn host_shortcut(event: &KeyEvent, code: KeyCode) -> Option<HostShortcut> {
    let command = event.modifiers.command();
    match (event.key, code) {
        (Key::Char('0'), _) if command => Some(HostShortcut::Reorient),
        (Key::Char('=') | Key::Char('+'), _) if command => Some(HostShortcut::ZoomIn),
        (Key::Char('-'), _) if command => Some(HostShortcut::ZoomOut),
        (_, KeyCode::KeyT) if !command => Some(HostShortcut::ToggleStory),
        (_, KeyCode::ArrowRight) => Some(HostShortcut::NextBeat),
        (_, KeyCode::ArrowLeft) => Some(HostShortcut::PreviousBeat),
        _ => None,
    }
}

/// Translate a Bevy key code into the core's key vocabulary.
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Home => Key::Home,
        KeyCode::Digit0 | KeyCode::Numpad0 => Key::Char('0'),
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Char('1'),
        KeyCode::Equal => Key::Char('='),
        KeyCode::NumpadAdd => Key::Char('+'),
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Char('-'),
        _ => Key::Other,
    }
}

fn modifiers_from(keyboard: &ButtonInput<KeyCode>) -> Modifiers {
    Modifiers {
        ctrl: keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
        meta: keyboard.any_pressed([KeyCode::SuperLeft, KeyCode::SuperRight]),
        shift: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        alt: keyboard.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]),
    }
}

/// Dispatch key presses to the explorer.
///
/// Navigation keys are only active outside the guided tour; the tour owns
/// navigation while it runs.
pub fn keyboard_navigation_system(
    mut explorer: ResMut<ExplorerRes>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if keyboard.get_just_pressed().next().is_none() {
        return;
    }

    let modifiers = modifiers_from(&keyboard);
    let ctx = KeyContext {
        navigation_active: !explorer.0.story_mode(),
        // No text inputs in this scene
        text_input_focused: false,
    };

    for code in keyboard.get_just_pressed() {
        let event = KeyEvent {
            key: key_from_code(*code),
            modifiers,
        };

        if explorer.0.handle_key(&event, &ctx).is_some() {
            continue;
        }

        let Some(shortcut) = host_shortcut(&event, *code) else {
            continue;
        };
        let explorer = &mut explorer.0;
        match shortcut {
            HostShortcut::Reorient => {
                explorer.reorient();
            }
            HostShortcut::ZoomIn => {
                explorer.zoom_in();
            }
            HostShortcut::ZoomOut => {
                explorer.zoom_out();
            }
            HostShortcut::ToggleStory => {
                let active = !explorer.story_mode();
                explorer.set_story_mode(active);
                if active && explorer.story().current_index().is_none() {
                    explorer.set_beat_index(Some(0));
                }
            }
            HostShortcut::NextBeat => {
                let beats = explorer.story().beats().len();
                let next = explorer.story().current_index().map_or(0, |i| i + 1);
                if next < beats {
                    explorer.set_beat_index(Some(next));
                }
            }
            HostShortcut::PreviousBeat => {
                if let Some(previous) = explorer
                    .story()
                    .current_index()
                    .and_then(|i| i.checked_sub(1))
                {
                    explorer.set_beat_index(Some(previous));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(code: KeyCode, ctrl: bool) -> KeyEvent {
        KeyEvent {
            key: key_from_code(code),
            modifiers: Modifiers {
                ctrl,
                ..Modifiers::default()
            },
        }
    }

    #[test]
    fn test_command_shortcuts() {
        assert_eq!(
            host_shortcut(&event(KeyCode::Digit0, true), KeyCode::Digit0),
            Some(HostShortcut::Reorient)
        );
        assert_eq!(
            host_shortcut(&event(KeyCode::Equal, true), KeyCode::Equal),
            Some(HostShortcut::ZoomIn)
        );
        assert_eq!(
            host_shortcut(&event(KeyCode::NumpadAdd, true), KeyCode::NumpadAdd),
            Some(HostShortcut::ZoomIn)
        );
        assert_eq!(
            host_shortcut(&event(KeyCode::Minus, true), KeyCode::Minus),
            Some(HostShortcut::ZoomOut)
        );
    }

    #[test]
    fn test_shortcuts_need_command_modifier() {
        assert_eq!(
            host_shortcut(&event(KeyCode::Digit0, false), KeyCode::Digit0),
            None
        );
        assert_eq!(
            host_shortcut(&event(KeyCode::Minus, false), KeyCode::Minus),
            None
        );
        assert_eq!(
            host_shortcut(&event(KeyCode::KeyT, true), KeyCode::KeyT),
            None
        );
    }

    #[test]
    fn test_story_keys() {
        assert_eq!(
            host_shortcut(&event(KeyCode::KeyT, false), KeyCode::KeyT),
            Some(HostShortcut::ToggleStory)
        );
        assert_eq!(
            host_shortcut(&event(KeyCode::ArrowRight, false), KeyCode::ArrowRight),
            Some(HostShortcut::NextBeat)
        );
        assert_eq!(
            host_shortcut(&event(KeyCode::ArrowLeft, false), KeyCode::ArrowLeft),
            Some(HostShortcut::PreviousBeat)
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_from_code(KeyCode::Escape), Key::Escape);
        assert_eq!(key_from_code(KeyCode::Numpad1), Key::Char('1'));
        assert_eq!(key_from_code(KeyCode::KeyQ), Key::Other);
    }
}
