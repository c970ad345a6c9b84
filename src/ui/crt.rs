//! CRT - Terminal abstraction using ncurses
//!
//! This module provides the terminal interface using the ncurses library:
//! raw screen mode setup and teardown, positioned prints, the reverse-video
//! highlight, box drawing, and blocking key reads.

use ncurses::CURSOR_VISIBILITY::{CURSOR_INVISIBLE, CURSOR_VISIBLE};
use ncurses::*;

use super::screen::Screen;
use crate::core::Settings;

/// CRT - Terminal handler
pub struct Crt {
    screen_width: i32,
    screen_height: i32,
}

impl Crt {
    /// Initialize the terminal and enter raw screen mode
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        // Locale must be configured before initscr for ncurses to handle
        // UTF-8 line-drawing characters
        #[cfg(unix)]
        init_locale();

        initscr();
        keypad(stdscr(), true);
        noecho();
        cbreak();

        if settings.hide_cursor {
            curs_set(CURSOR_INVISIBLE);
        }
        if settings.instant_escape {
            set_escdelay(0);
        }

        let mut crt = Crt {
            screen_width: 0,
            screen_height: 0,
        };
        crt.update_size();
        Ok(crt)
    }

    /// Update cached screen dimensions
    pub fn update_size(&mut self) {
        getmaxyx(stdscr(), &mut self.screen_height, &mut self.screen_width);
    }

    /// Restore the terminal to normal mode
    pub fn done(&self) {
        curs_set(CURSOR_VISIBLE);
        endwin();
    }
}

impl Screen for Crt {
    fn width(&self) -> i32 {
        self.screen_width
    }

    fn height(&self) -> i32 {
        self.screen_height
    }

    fn move_cursor(&mut self, y: i32, x: i32) {
        mv(y, x);
    }

    fn print_at(&mut self, y: i32, x: i32, text: &str) {
        // mvaddstr fails on out-of-range coordinates; that is the clipping
        // contract callers rely on
        let _ = mvaddstr(y, x, text);
    }

    fn set_reverse(&mut self, on: bool) {
        if on {
            attron(A_REVERSE);
        } else {
            attroff(A_REVERSE);
        }
    }

    fn draw_box(&mut self, y: i32, x: i32, h: i32, w: i32) {
        // Top border
        mvhline(y, x, ACS_HLINE(), w);
        mvaddch(y, x, ACS_ULCORNER());
        mvaddch(y, x + w - 1, ACS_URCORNER());

        // Side borders
        for i in 1..h - 1 {
            mvaddch(y + i, x, ACS_VLINE());
            mvaddch(y + i, x + w - 1, ACS_VLINE());
        }

        // Bottom border
        mvhline(y + h - 1, x, ACS_HLINE(), w);
        mvaddch(y + h - 1, x, ACS_LLCORNER());
        mvaddch(y + h - 1, x + w - 1, ACS_LRCORNER());
    }

    fn clear(&mut self) {
        clear();
    }

    fn refresh(&mut self) {
        refresh();
    }

    fn read_key(&mut self) -> Option<i32> {
        let ch = getch();
        if ch == ERR {
            None
        } else {
            Some(ch)
        }
    }
}

impl Drop for Crt {
    fn drop(&mut self) {
        self.done();
    }
}

/// Set LC_CTYPE from the environment, or the system default when unset
#[cfg(unix)]
fn init_locale() {
    let lc = std::env::var("LC_CTYPE")
        .or_else(|_| std::env::var("LC_ALL"))
        .unwrap_or_default();
    let c_str = std::ffi::CString::new(lc).unwrap_or_default();
    unsafe {
        libc::setlocale(libc::LC_CTYPE, c_str.as_ptr());
    }
}
