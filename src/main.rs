//! buttonpad demo - the smallest embedding application
//!
//! One "Greet" button: Tab cycles focus, Return activates (opening a
//! message box), Esc quits.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use buttonpad::{dialog, ButtonPad, Crt, KeyBindings, Settings, Signal};

/// buttonpad demo - a single button that opens a message box
#[derive(Parser, Debug)]
#[command(name = "buttonpad-demo")]
struct Args {
    /// Keep the hardware cursor visible
    #[arg(long = "keep-cursor")]
    keep_cursor: bool,

    /// Wait for escape sequences instead of treating Esc as instant
    #[arg(long = "slow-escape")]
    slow_escape: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG selects events; silent by default so curses owns the screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings {
        hide_cursor: !args.keep_cursor,
        instant_escape: !args.slow_escape,
    };
    let mut crt = Crt::new(&settings)?;

    let mut pad = ButtonPad::new();
    pad.register(
        10,
        15,
        "Greet",
        Some(Box::new(|screen| {
            if let Err(err) = dialog::message_box(screen, "1 + 1 = 2", "What is 1 + 1?") {
                tracing::error!(%err, "message box failed");
            }
        })),
    );

    let keys = KeyBindings::default();
    loop {
        match pad.run_frame(&mut crt, &keys)? {
            Signal::Continue => {}
            Signal::Stop => break,
        }
    }

    crt.done();
    Ok(())
}
