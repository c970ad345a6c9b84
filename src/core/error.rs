//! Toolkit error type

use thiserror::Error;

/// Errors surfaced by the frame loop and the modal dialogs.
#[derive(Debug, Error)]
pub enum UiError {
    /// The terminal stopped delivering input events. A broken input channel
    /// cannot self-heal, so callers are expected to tear down rather than
    /// retry.
    #[error("terminal input stream closed")]
    InputClosed,
}
