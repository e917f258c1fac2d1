use crate::api::ProfileClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::run_worker;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Bound on queued API commands. The UI never has more than a handful
/// outstanding.
const COMMAND_BUFFER: usize = 32;

/// How long outstanding requests get to finish after the UI exits.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

pub fn run(config: Config) -> anyhow::Result<()> {
    let client = ProfileClient::new(&config.api).context("failed to create API client")?;
    tracing::info!(base_url = client.base_url(), "profile service configured");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    runtime.spawn(run_worker(Arc::new(client), command_rx, events.sender()));

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let mut app = App::new();
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    app.teardown();
    drop(app);
    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("passcard exited");
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .context("failed to draw frame")?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::ProfileFetched { generation, result }) => {
                app.on_profile_fetched(generation, result)
            }
            Ok(AppEvent::ProfileSaved { generation, result }) => {
                app.on_profile_saved(generation, result)
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
