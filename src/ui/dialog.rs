//! Dialog - modal message and question boxes
//!
//! Both dialogs take over the screen: clear, draw a bordered panel inset
//! from the terminal edges, then loop reading keys until a resolving key is
//! seen. They bypass the button registry entirely and leave the screen
//! cleared so the resuming frame loop redraws cleanly.

use tracing::debug;

use super::screen::Screen;
use crate::core::{UiError, KEY_ESC, KEY_RETURN, KEY_TAB};

/// Rows/columns between the panel border and every terminal edge
const PANEL_MARGIN: i32 = 2;

/// Label of the message box's single pseudo-button
const CLOSE_LABEL: &str = "<Close>";

/// Default message box title
pub const DEFAULT_MESSAGE_TITLE: &str = "Message";
/// Default question box title and option labels
pub const DEFAULT_QUESTION_TITLE: &str = "Question";
pub const DEFAULT_OK_LABEL: &str = "<Ok>";
pub const DEFAULT_CANCEL_LABEL: &str = "<Cancel>";

/// How a question box resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Return pressed on the first option
    Confirmed,
    /// Return pressed on the second option
    Cancelled,
    /// Dismissed with Esc, no selection committed
    Unresolved,
}

/// Horizontal anchor for dialog text: the text's right edge approaches the
/// screen center (`cols/2 - len`, not `cols/2 - len/2`). Kept for
/// compatibility with the layout this toolkit reimplements.
fn anchored_x(cols: i32, text: &str) -> i32 {
    cols / 2 - text.chars().count() as i32
}

/// Clear the screen and draw the dialog panel with its title
fn open_panel(screen: &mut dyn Screen, title: &str) -> (i32, i32) {
    let rows = screen.height();
    let cols = screen.width();

    screen.clear();
    screen.refresh();
    screen.draw_box(
        PANEL_MARGIN,
        PANEL_MARGIN,
        rows - 2 * PANEL_MARGIN,
        cols - 2 * PANEL_MARGIN,
    );
    screen.print_at(PANEL_MARGIN, anchored_x(cols, title), title);

    (rows, cols)
}

/// Show a message until it is acknowledged.
///
/// The single `<Close>` pseudo-button is always drawn highlighted. Esc and
/// Return both dismiss; there is no distinction between them.
pub fn message_box(screen: &mut dyn Screen, message: &str, title: &str) -> Result<(), UiError> {
    let (rows, cols) = open_panel(screen, title);

    loop {
        screen.print_at(rows / 2 - 2, anchored_x(cols, message), message);
        screen.set_reverse(true);
        screen.print_at(rows / 2, anchored_x(cols, CLOSE_LABEL), CLOSE_LABEL);
        screen.set_reverse(false);
        screen.refresh();

        let key = screen.read_key().ok_or(UiError::InputClosed)?;
        if key == KEY_ESC || key == KEY_RETURN {
            break;
        }
    }

    debug!(title, "message box dismissed");
    screen.clear();
    Ok(())
}

/// Ask a binary question.
///
/// Selection starts on `ok_label`; Tab toggles between the two options,
/// Return commits the selected one, Esc abandons the dialog with
/// `DialogOutcome::Unresolved`.
pub fn question_box(
    screen: &mut dyn Screen,
    message: &str,
    title: &str,
    ok_label: &str,
    cancel_label: &str,
) -> Result<DialogOutcome, UiError> {
    let (rows, cols) = open_panel(screen, title);

    let mut sel = 0;
    let outcome = loop {
        screen.print_at(rows / 2 - 2, anchored_x(cols, message), message);

        for (index, label) in [(0, ok_label), (1, cancel_label)] {
            let selected = sel == index;
            if selected {
                screen.set_reverse(true);
            }
            screen.print_at(rows / 2 + 2 * index, anchored_x(cols, label), label);
            if selected {
                screen.set_reverse(false);
            }
        }
        screen.refresh();

        let key = screen.read_key().ok_or(UiError::InputClosed)?;
        if key == KEY_ESC {
            break DialogOutcome::Unresolved;
        } else if key == KEY_TAB {
            // Two options only: toggle, not a general modulo advance
            sel = 1 - sel;
        } else if key == KEY_RETURN {
            break if sel == 0 {
                DialogOutcome::Confirmed
            } else {
                DialogOutcome::Cancelled
            };
        }
    };

    debug!(title, ?outcome, "question box resolved");
    screen.clear();
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screen::{DrawOp, ScriptedScreen};

    // ==================== Message Box Tests ====================

    #[test]
    fn test_message_box_resolves_on_return() {
        let mut screen = ScriptedScreen::new(&[KEY_RETURN]);
        message_box(&mut screen, "hello", "Message").unwrap();
        assert!(screen.ended_cleared());
    }

    #[test]
    fn test_message_box_resolves_on_escape() {
        let mut screen = ScriptedScreen::new(&[KEY_ESC]);
        message_box(&mut screen, "hello", "Message").unwrap();
        assert!(screen.ended_cleared());
    }

    #[test]
    fn test_message_box_escape_and_return_are_indistinguishable() {
        let mut by_return = ScriptedScreen::new(&[KEY_RETURN]);
        message_box(&mut by_return, "hello", "Message").unwrap();

        let mut by_escape = ScriptedScreen::new(&[KEY_ESC]);
        message_box(&mut by_escape, "hello", "Message").unwrap();

        assert_eq!(by_return.ops, by_escape.ops);
    }

    #[test]
    fn test_message_box_ignores_other_keys() {
        let mut screen = ScriptedScreen::new(&['a' as i32, KEY_TAB, KEY_RETURN]);
        message_box(&mut screen, "hello", "Message").unwrap();

        // Three loop iterations, each drawing the close button highlighted
        let close_draws = screen
            .highlighted_prints()
            .iter()
            .filter(|op| matches!(op, DrawOp::Print { text, .. } if text == "<Close>"))
            .count();
        assert_eq!(close_draws, 3);
    }

    #[test]
    fn test_message_box_close_button_always_highlighted() {
        let mut screen = ScriptedScreen::new(&[KEY_RETURN]);
        message_box(&mut screen, "hello", "Message").unwrap();

        let highlighted = screen.highlighted_prints();
        assert_eq!(highlighted.len(), 1);
        // 80 cols: x = 40 - len("<Close>") = 33, on the center row
        assert_eq!(
            highlighted[0],
            &DrawOp::Print {
                y: 12,
                x: 33,
                text: "<Close>".to_string(),
                reverse: true,
            }
        );
    }

    #[test]
    fn test_message_box_layout() {
        let mut screen = ScriptedScreen::with_size(20, 60, &[KEY_RETURN]);
        message_box(&mut screen, "lots done", "Status").unwrap();

        // Panel inset two cells from every edge
        assert!(screen.ops.contains(&DrawOp::Box {
            y: 2,
            x: 2,
            h: 16,
            w: 56,
        }));
        // Title and message anchored right-edge-to-center
        assert!(screen.ops.contains(&DrawOp::Print {
            y: 2,
            x: 30 - 6,
            text: "Status".to_string(),
            reverse: false,
        }));
        assert!(screen.ops.contains(&DrawOp::Print {
            y: 8,
            x: 30 - 9,
            text: "lots done".to_string(),
            reverse: false,
        }));
    }

    #[test]
    fn test_message_box_closed_input_is_fatal() {
        let mut screen = ScriptedScreen::new(&[]);
        let err = message_box(&mut screen, "hello", "Message").unwrap_err();
        assert!(matches!(err, UiError::InputClosed));
    }

    // ==================== Question Box Tests ====================

    fn ask(keys: &[i32]) -> (DialogOutcome, ScriptedScreen) {
        let mut screen = ScriptedScreen::new(keys);
        let outcome =
            question_box(&mut screen, "Proceed?", "Question", "<Ok>", "<Cancel>").unwrap();
        (outcome, screen)
    }

    #[test]
    fn test_question_box_return_confirms() {
        let (outcome, screen) = ask(&[KEY_RETURN]);
        assert_eq!(outcome, DialogOutcome::Confirmed);
        assert!(screen.ended_cleared());
    }

    #[test]
    fn test_question_box_tab_then_return_cancels() {
        let (outcome, _) = ask(&[KEY_TAB, KEY_RETURN]);
        assert_eq!(outcome, DialogOutcome::Cancelled);
    }

    #[test]
    fn test_question_box_tab_toggles_back() {
        let (outcome, _) = ask(&[KEY_TAB, KEY_TAB, KEY_RETURN]);
        assert_eq!(outcome, DialogOutcome::Confirmed);
    }

    #[test]
    fn test_question_box_escape_is_unresolved() {
        let (outcome, screen) = ask(&[KEY_ESC]);
        assert_eq!(outcome, DialogOutcome::Unresolved);
        assert!(screen.ended_cleared());

        // Esc wins immediately even mid-navigation
        let (outcome, _) = ask(&[KEY_TAB, KEY_ESC]);
        assert_eq!(outcome, DialogOutcome::Unresolved);
    }

    #[test]
    fn test_question_box_exactly_one_option_highlighted_per_frame() {
        let (_, screen) = ask(&[KEY_TAB, 'z' as i32, KEY_RETURN]);

        // One highlighted option per loop iteration
        assert_eq!(screen.highlighted_prints().len(), 3);
        for op in screen.highlighted_prints() {
            match op {
                DrawOp::Print { text, .. } => assert!(text == "<Ok>" || text == "<Cancel>"),
                other => panic!("unexpected op {:?}", other),
            }
        }
    }

    #[test]
    fn test_question_box_option_rows() {
        let (_, screen) = ask(&[KEY_RETURN]);

        // 24 rows: message at 10, first option at 12, second at 14
        assert!(screen.ops.contains(&DrawOp::Print {
            y: 10,
            x: 40 - 8,
            text: "Proceed?".to_string(),
            reverse: false,
        }));
        assert!(screen.ops.contains(&DrawOp::Print {
            y: 12,
            x: 40 - 4,
            text: "<Ok>".to_string(),
            reverse: true,
        }));
        assert!(screen.ops.contains(&DrawOp::Print {
            y: 14,
            x: 40 - 8,
            text: "<Cancel>".to_string(),
            reverse: false,
        }));
    }

    #[test]
    fn test_question_box_renders_custom_labels() {
        let mut screen = ScriptedScreen::new(&[KEY_TAB, KEY_RETURN]);
        let outcome =
            question_box(&mut screen, "Save?", "Confirm", "<Yes>", "<No>").unwrap();
        assert_eq!(outcome, DialogOutcome::Cancelled);

        let labels: Vec<_> = screen
            .prints()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Print { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"<Yes>"));
        assert!(labels.contains(&"<No>"));
        assert!(!labels.iter().any(|l| *l == "<Ok>" || *l == "<Cancel>"));
    }

    #[test]
    fn test_question_box_closed_input_is_fatal() {
        let mut screen = ScriptedScreen::new(&[KEY_TAB]);
        let err = question_box(&mut screen, "Proceed?", "Question", "<Ok>", "<Cancel>")
            .unwrap_err();
        assert!(matches!(err, UiError::InputClosed));
    }
}
