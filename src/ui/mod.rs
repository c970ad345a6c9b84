//! UI module
//!
//! This module contains all UI-related components:
//! - Crt: terminal abstraction using ncurses
//! - Screen: the terminal contract the widgets draw through
//! - Buttons: button registry, focus cycling, and the frame loop
//! - Dialog: modal message and question boxes

mod buttons;
mod crt;
pub mod dialog;
mod screen;

pub use buttons::*;
pub use crt::*;
pub use screen::*;
