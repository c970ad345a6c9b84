//! Buttons - the widget registry, focus cycling, and the frame loop
//!
//! A `ButtonPad` owns an ordered list of buttons and a single focus index.
//! Each call to `run_frame` draws every button (the focused one in reverse
//! video), blocks for one key, and maps it to exit, focus-advance, or
//! activation.

use tracing::{debug, trace};

use super::screen::Screen;
use crate::core::{KeyBindings, UiError};

/// Callback invoked when a button is activated. It receives the screen so
/// it can open a modal dialog.
pub type OnPress = Box<dyn FnMut(&mut dyn Screen)>;

/// A clickable label at a fixed position.
///
/// Position and label are fixed after registration; the registry renders
/// buttons in registration order, which is also the focus-cycle order.
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub label: String,
    on_press: Option<OnPress>,
}

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

/// Button registry and focus state.
///
/// Owned by the caller and passed into every frame; independent pads do not
/// share any state.
#[derive(Default)]
pub struct ButtonPad {
    buttons: Vec<Button>,
    focus: usize,
    last_key: Option<i32>,
}

impl ButtonPad {
    /// Create an empty pad
    pub fn new() -> Self {
        ButtonPad::default()
    }

    /// Register a button at `(x, y)`.
    ///
    /// Coordinates are not checked against the screen; out-of-range draws
    /// are clipped by the terminal. The new button joins the focus cycle at
    /// the end.
    pub fn register(&mut self, x: i32, y: i32, label: &str, on_press: Option<OnPress>) {
        self.buttons.push(Button {
            x,
            y,
            label: label.to_string(),
            on_press,
        });
    }

    /// Number of registered buttons
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether no buttons are registered
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// The button at `index`, if any
    pub fn button(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }

    /// The focused index, or `None` while the registry is empty
    pub fn focused(&self) -> Option<usize> {
        if self.buttons.is_empty() {
            None
        } else {
            Some(self.focus)
        }
    }

    /// The key read by the most recent frame
    pub fn last_key(&self) -> Option<i32> {
        self.last_key
    }

    /// Move focus forward one button, wrapping at the end. No-op while the
    /// registry is empty.
    pub fn advance_focus(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.buttons.len();
    }

    /// Draw every button in registration order; only the focused button's
    /// print is bracketed by the reverse attribute.
    fn draw(&self, screen: &mut dyn Screen) {
        for (index, button) in self.buttons.iter().enumerate() {
            let focused = self.focused() == Some(index);
            if focused {
                screen.set_reverse(true);
            }
            screen.print_at(button.y, button.x, &button.label);
            if focused {
                screen.set_reverse(false);
            }
        }
    }

    /// Invoke the focused button's callback, if it has one
    fn activate(&mut self, screen: &mut dyn Screen) {
        let Some(index) = self.focused() else {
            return;
        };
        let Button { label, on_press, .. } = &mut self.buttons[index];
        if let Some(on_press) = on_press {
            debug!(index, label = %label, "button activated");
            on_press(screen);
        }
    }

    /// Run one frame: draw all buttons, block for one key, dispatch it.
    ///
    /// Dispatch checks `keys.exit` first, then `keys.advance`, then
    /// `keys.activate`; any other key is ignored. A closed input stream is
    /// fatal and reported as `UiError::InputClosed`.
    pub fn run_frame(
        &mut self,
        screen: &mut dyn Screen,
        keys: &KeyBindings,
    ) -> Result<Signal, UiError> {
        self.draw(screen);
        screen.refresh();

        let key = screen.read_key().ok_or(UiError::InputClosed)?;
        self.last_key = Some(key);
        trace!(key, "frame input");

        if key == keys.exit {
            return Ok(Signal::Stop);
        } else if key == keys.advance {
            self.advance_focus();
        } else if key == keys.activate {
            self.activate(screen);
        }

        Ok(Signal::Continue)
    }
}
