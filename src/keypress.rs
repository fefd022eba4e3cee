// src/keypress.rs

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Block until a single key is pressed. Ctrl+C while waiting terminates
/// the process immediately.
pub fn wait_for_keypress() -> Result<()> {
    enable_raw_mode().context("failed to enable raw terminal mode")?;
    let result = wait_loop();
    disable_raw_mode().context("failed to disable raw terminal mode")?;
    result
}

fn wait_loop() -> Result<()> {
    loop {
        let event = event::read().context("failed to read terminal event")?;
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                let _ = disable_raw_mode();
                std::process::exit(130);
            }
            return Ok(());
        }
    }
}
