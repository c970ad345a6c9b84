//! buttonpad - a minimal immediate-mode button toolkit for the terminal
//!
//! Register buttons at fixed coordinates on a [`ButtonPad`], then drive
//! [`ButtonPad::run_frame`] in a loop: each frame draws every button (the
//! focused one in reverse video), blocks for one key, and maps it to exit,
//! focus-advance, or activation. Button callbacks run synchronously and may
//! open the modal dialogs in [`dialog`], which nest their own input loops on
//! the same screen.
//!
//! ```no_run
//! use buttonpad::{dialog, ButtonPad, Crt, KeyBindings, Settings, Signal};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut crt = Crt::new(&Settings::default())?;
//!     let mut pad = ButtonPad::new();
//!     pad.register(10, 15, "Greet", Some(Box::new(|screen| {
//!         let _ = dialog::message_box(screen, "1 + 1 = 2", "What is 1 + 1?");
//!     })));
//!
//!     let keys = KeyBindings::default();
//!     while pad.run_frame(&mut crt, &keys)? == Signal::Continue {}
//!
//!     crt.done();
//!     Ok(())
//! }
//! ```

mod core;
mod ui;

pub use crate::core::{KeyBindings, Settings, UiError, KEY_ESC, KEY_RETURN, KEY_TAB};
pub use crate::ui::dialog;
pub use crate::ui::dialog::DialogOutcome;
pub use crate::ui::{Button, ButtonPad, Crt, OnPress, Screen, Signal};

#[cfg(feature = "test-utils")]
pub use crate::ui::{DrawOp, ScriptedScreen};
