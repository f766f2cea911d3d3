use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

/// Event poll timeout
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Draw, wait for a key, apply it; until the app stops running
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => handle_input(app, key),
            Ok(_) => {
                // Resize and other events only need the redraw at the top of the loop
            }
            Err(e) => tracing::debug!("event read error: {e}"),
        }
    }
    Ok(())
}
