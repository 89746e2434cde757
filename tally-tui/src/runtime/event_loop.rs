use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Draw, wait up to one tick for a key, repeat. Live durations are recomputed
/// from the clock on every snapshot, so the tick only sets the redraw rate.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let mut view = app.view_model();

    loop {
        terminal.draw(|f| ui::render(f, &view))?;

        view = match next_key(tick_rate)? {
            Some(key) => app.handle_key(key),
            None => app.view_model(),
        };

        if !app.running {
            break;
        }
    }

    Ok(())
}

fn next_key(timeout: Duration) -> Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}
