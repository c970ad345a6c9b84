//! Settings module
//!
//! User-configurable terminal options and the key triple the frame loop
//! dispatches on.

/// Escape key code
pub const KEY_ESC: i32 = 27;
/// Tab key code
pub const KEY_TAB: i32 = 9;
/// Return key code
pub const KEY_RETURN: i32 = 10;

/// Terminal initialization options, applied by `Crt::new`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Hide the hardware cursor while the toolkit owns the screen
    pub hide_cursor: bool,
    /// Deliver Esc immediately instead of waiting for an escape sequence
    pub instant_escape: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hide_cursor: true,
            instant_escape: true,
        }
    }
}

/// Keys the frame loop dispatches on.
///
/// Checked in a fixed priority order: `exit` first, then `advance`, then
/// `activate`. Binding two roles to the same key therefore resolves to the
/// earlier role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Stop the frame loop
    pub exit: i32,
    /// Move focus to the next button
    pub advance: i32,
    /// Invoke the focused button's callback
    pub activate: i32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            exit: KEY_ESC,
            advance: KEY_TAB,
            activate: KEY_RETURN,
        }
    }
}
