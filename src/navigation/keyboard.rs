//! Key events → navigation commands.
//!
//! | Key                 | Command          |
//! |---------------------|------------------|
//! | Escape, Backspace   | back one level   |
//! | Home                | jump to L1       |
//! | Cmd/Ctrl + 1        | jump to L1       |
//!
//! Keys are ignored while a text input has focus or navigation mode is off.

use super::state::Navigator;

/// Physical keys the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Backspace,
    Home,
    /// A printable character key, e.g. `'1'`.
    Char(char),
    Other,
}

/// Modifier keys held during the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere.
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Cmd on macOS or Ctrl elsewhere.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn command(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }
}

/// Host state checked before any key is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    /// Whether hierarchy navigation is the active mode.
    pub navigation_active: bool,
    /// Whether a text input currently has keyboard focus.
    pub text_input_focused: bool,
}

impl Default for KeyContext {
    fn default() -> Self {
        Self {
            navigation_active: true,
            text_input_focused: false,
        }
    }
}

/// Command produced by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Back,
    Home,
    /// Cmd/Ctrl+1: explicit jump to L1, not a walk up the back chain.
    JumpToL1,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardController;

impl KeyboardController {
    /// Map a key event to a command, applying the guards first.
    pub fn command_for(&self, event: &KeyEvent, ctx: &KeyContext) -> Option<KeyCommand> {
        if !ctx.navigation_active || ctx.text_input_focused {
            return None;
        }

        match event.key {
            Key::Escape | Key::Backspace => Some(KeyCommand::Back),
            Key::Home => Some(KeyCommand::Home),
            Key::Char('1') if event.modifiers.command() => Some(KeyCommand::JumpToL1),
            _ => None,
        }
    }

    /// Map and apply a key event. Returns the command that ran, if any.
    pub fn dispatch(
        &self,
        event: &KeyEvent,
        ctx: &KeyContext,
        nav: &mut impl Navigator,
    ) -> Option<KeyCommand> {
        let command = self.command_for(event, ctx)?;
        tracing::debug!("key {:?} -> {:?}", event.key, command);
        match command {
            KeyCommand::Back => nav.back(),
            KeyCommand::Home | KeyCommand::JumpToL1 => nav.navigate_to_l1(),
        }
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::state::NavigationState;
    use crate::navigation::ZoomLevel;

    fn deep() -> NavigationState {
        let mut nav = NavigationState::new();
        nav.navigate_to_l3("email", "Email", "C001", "ONC Launch Wave 1");
        nav
    }

    #[test]
    fn test_escape_and_backspace_go_back() {
        let keys = KeyboardController;
        let mut nav = deep();
        let ctx = KeyContext::default();

        assert_eq!(
            keys.dispatch(&KeyEvent::plain(Key::Escape), &ctx, &mut nav),
            Some(KeyCommand::Back)
        );
        assert_eq!(nav.level(), ZoomLevel::Campaign);

        keys.dispatch(&KeyEvent::plain(Key::Backspace), &ctx, &mut nav);
        assert_eq!(nav.level(), ZoomLevel::Ecosystem);
    }

    #[test]
    fn test_home_and_command_one_jump_to_l1() {
        let keys = KeyboardController;
        let ctx = KeyContext::default();

        let mut nav = deep();
        keys.dispatch(&KeyEvent::plain(Key::Home), &ctx, &mut nav);
        assert_eq!(nav.level(), ZoomLevel::Ecosystem);

        let mut nav = deep();
        assert_eq!(
            keys.dispatch(&KeyEvent::command(Key::Char('1')), &ctx, &mut nav),
            Some(KeyCommand::JumpToL1)
        );
        assert_eq!(nav.level(), ZoomLevel::Ecosystem);
    }

    #[test]
    fn test_plain_one_and_other_keys_ignored() {
        let keys = KeyboardController;
        let ctx = KeyContext::default();
        let mut nav = deep();

        assert!(keys
            .dispatch(&KeyEvent::plain(Key::Char('1')), &ctx, &mut nav)
            .is_none());
        assert!(keys
            .dispatch(&KeyEvent::plain(Key::Other), &ctx, &mut nav)
            .is_none());
        assert_eq!(nav.level(), ZoomLevel::Hcp);
    }

    #[test]
    fn test_guards_block_dispatch() {
        let keys = KeyboardController;
        let mut nav = deep();

        let typing = KeyContext {
            navigation_active: true,
            text_input_focused: true,
        };
        assert!(keys
            .dispatch(&KeyEvent::plain(Key::Escape), &typing, &mut nav)
            .is_none());

        let inactive = KeyContext {
            navigation_active: false,
            text_input_focused: false,
        };
        assert!(keys
            .dispatch(&KeyEvent::plain(Key::Home), &inactive, &mut nav)
            .is_none());
        assert_eq!(nav.level(), ZoomLevel::Hcp);
    }
}
