use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Reads terminal input on a background thread and forwards it over a channel.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(tx, tick_rate, shutdown));
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn input thread: {err}");
        }

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn input_loop(tx: Sender<AppEvent>, tick_rate: Duration, shutdown: ShutdownHandle) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        // Short poll timeout so the shutdown flag is checked frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!("Terminal read error: {err}");
                    break;
                }
            },
            Ok(false) => None,
            Err(err) => {
                tracing::error!("Terminal poll error: {err}");
                break;
            }
        };

        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
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
    tracing::debug!("Input thread stopped");
}
