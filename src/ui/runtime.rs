use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::from_config(config);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(page = ?app.page(), "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Redraw on the next iteration picks up the new size.
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "resize"),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
