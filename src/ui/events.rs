use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Background reader forwarding terminal events and periodic ticks.
///
/// The reader thread only produces events; all state lives on the thread
/// that calls [`EventHandler::next`].
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                                Ok(Event::Resize(cols, rows)) => {
                                    tx.send(AppEvent::Resize(cols, rows))
                                }
                                Ok(_) => Ok(()),
                                Err(err) => {
                                    tracing::error!(error = %err, "terminal read failed");
                                    break;
                                }
                            };
                            if forwarded.is_err() {
                                // Receiver gone: the UI loop has exited.
                                break;
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            });
        if let Err(err) = spawned {
            tracing::error!(error = %err, "failed to spawn input thread");
        }

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
