//! Screen - the terminal contract the widgets draw through
//!
//! The toolkit core never talks to curses directly; everything goes through
//! this trait so the frame loop and the dialogs can be driven by a scripted
//! double in tests. `Crt` is the production implementation.

/// Terminal primitives consumed by the toolkit.
///
/// Coordinates are `(y, x)` in the curses convention. Out-of-range positions
/// are not validated here; implementations are expected to clip or ignore
/// them the way the terminal itself does.
pub trait Screen {
    /// Screen width in columns
    fn width(&self) -> i32;

    /// Screen height in rows
    fn height(&self) -> i32;

    /// Move the cursor
    fn move_cursor(&mut self, y: i32, x: i32);

    /// Print a string at a position
    fn print_at(&mut self, y: i32, x: i32, text: &str);

    /// Toggle the reverse-video highlight attribute
    fn set_reverse(&mut self, on: bool);

    /// Draw a box outline of the given size
    fn draw_box(&mut self, y: i32, x: i32, h: i32, w: i32);

    /// Clear the screen
    fn clear(&mut self);

    /// Flush pending output to the terminal
    fn refresh(&mut self);

    /// Block for one key; `None` means the input stream is closed
    fn read_key(&mut self) -> Option<i32>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use scripted::{DrawOp, ScriptedScreen};

#[cfg(any(test, feature = "test-utils"))]
mod scripted {
    use std::collections::VecDeque;

    use super::Screen;

    /// One recorded drawing call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DrawOp {
        Print {
            y: i32,
            x: i32,
            text: String,
            reverse: bool,
        },
        MoveCursor {
            y: i32,
            x: i32,
        },
        Box {
            y: i32,
            x: i32,
            h: i32,
            w: i32,
        },
        Clear,
        Refresh,
    }

    /// Scripted terminal double: replays a fixed key sequence and records
    /// every drawing call, including the reverse-attribute state each print
    /// was issued under.
    pub struct ScriptedScreen {
        rows: i32,
        cols: i32,
        keys: VecDeque<i32>,
        reverse: bool,
        pub ops: Vec<DrawOp>,
    }

    impl ScriptedScreen {
        /// 24x80 screen with a scripted key sequence
        pub fn new(keys: &[i32]) -> Self {
            Self::with_size(24, 80, keys)
        }

        pub fn with_size(rows: i32, cols: i32, keys: &[i32]) -> Self {
            ScriptedScreen {
                rows,
                cols,
                keys: keys.iter().copied().collect(),
                reverse: false,
                ops: Vec::new(),
            }
        }

        /// All prints, in issue order
        pub fn prints(&self) -> Vec<&DrawOp> {
            self.ops
                .iter()
                .filter(|op| matches!(op, DrawOp::Print { .. }))
                .collect()
        }

        /// Prints issued while the reverse attribute was on
        pub fn highlighted_prints(&self) -> Vec<&DrawOp> {
            self.ops
                .iter()
                .filter(|op| matches!(op, DrawOp::Print { reverse: true, .. }))
                .collect()
        }

        /// Whether the final drawing call was a clear
        pub fn ended_cleared(&self) -> bool {
            matches!(self.ops.last(), Some(DrawOp::Clear))
        }
    }

    impl Screen for ScriptedScreen {
        fn width(&self) -> i32 {
            self.cols
        }

        fn height(&self) -> i32 {
            self.rows
        }

        fn move_cursor(&mut self, y: i32, x: i32) {
            self.ops.push(DrawOp::MoveCursor { y, x });
        }

        fn print_at(&mut self, y: i32, x: i32, text: &str) {
            self.ops.push(DrawOp::Print {
                y,
                x,
                text: text.to_string(),
                reverse: self.reverse,
            });
        }

        fn set_reverse(&mut self, on: bool) {
            self.reverse = on;
        }

        fn draw_box(&mut self, y: i32, x: i32, h: i32, w: i32) {
            self.ops.push(DrawOp::Box { y, x, h, w });
        }

        fn clear(&mut self) {
            self.ops.push(DrawOp::Clear);
        }

        fn refresh(&mut self) {
            self.ops.push(DrawOp::Refresh);
        }

        fn read_key(&mut self) -> Option<i32> {
            self.keys.pop_front()
        }
    }
}
