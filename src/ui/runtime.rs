use crate::config::UiConfig;
use crate::roster::RosterStore;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &UiConfig, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(RosterStore::new(), config.show_debug_panel);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "UI started");

    let result = drive(
        &mut app,
        |timeout| events.next(timeout),
        |app| terminal.draw(|frame| draw(frame, app)).map(|_| ()),
        &shutdown,
        tick_rate,
    );

    drop(guard);
    match &result {
        Ok(()) => tracing::info!(
            transitions = app.store().version(),
            users = app.state().user_count(),
            "UI stopped"
        ),
        Err(err) => tracing::error!("UI stopped: {err}"),
    }
    result
}

/// Run the event loop, then signal shutdown so the input thread stops,
/// whether the loop ended normally or with an error.
fn drive<N, R>(
    app: &mut App,
    next_event: N,
    render: R,
    shutdown: &ShutdownHandle,
    tick_rate: Duration,
) -> io::Result<()>
where
    N: FnMut(Duration) -> Result<AppEvent, RecvTimeoutError>,
    R: FnMut(&App) -> io::Result<()>,
{
    let result = event_loop(app, next_event, render, shutdown, tick_rate);
    shutdown.signal();
    result
}

fn event_loop<N, R>(
    app: &mut App,
    mut next_event: N,
    mut render: R,
    shutdown: &ShutdownHandle,
    tick_rate: Duration,
) -> io::Result<()>
where
    N: FnMut(Duration) -> Result<AppEvent, RecvTimeoutError>,
    R: FnMut(&App) -> io::Result<()>,
{
    loop {
        if app.take_redraw() {
            render(app)?;
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            return Ok(());
        }

        match next_event(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                app.mark_dirty();
            }
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
