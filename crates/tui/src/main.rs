//! gear-tui binary: startup, shutdown, and the main event loop.
//!
//! Responsibilities:
//! - Initialize logging, configuration, the HTTP client, and the terminal.
//! - Run the select loop over the action channel, UI ticks, and the
//!   connection status poll.
//!
//! Does NOT handle:
//! - HTTP details (see `crates/client`).
//! - Configuration parsing (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and the alternate screen on startup and
//!   restores both on exit, panics included (`TerminalGuard`).
//! - `load_dotenv()` runs before config loading to support `.env` files.
//! - Configuration precedence: CLI args > env vars > defaults.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{EnableMouseCapture, Event as CrosstermEvent, EventStream},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tokio::time::MissedTickBehavior;
use tokio_util::task::TaskTracker;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gear_client::GearClient;
use gear_config::constants::DEFAULT_CHANNEL_CAPACITY;
use gear_config::{load_config, load_dotenv};
use gear_tui::action::Action;
use gear_tui::app::App;
use gear_tui::cli::Cli;
use gear_tui::runtime::side_effects::{FetchSessions, SharedClient, handle_side_effects};
use gear_tui::runtime::terminal::TerminalGuard;
use gear_tui::ui;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv()?;
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "gear-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let mut config = load_config()?;
    if let Some(base_url) = cli.base_url {
        config.connection.base_url = base_url;
    }
    if let Some(page_size) = cli.page_size {
        config.tables.page_size = page_size;
    }
    let config = config.sanitize();

    let client: SharedClient =
        Arc::new(GearClient::builder().from_config(&config).build()?);
    tracing::info!(base_url = %client.base_url(), "starting gear-tui");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    // Keep alive until return so the terminal is restored on every exit path.
    let _terminal_guard = TerminalGuard::new(no_mouse);
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let tracker = TaskTracker::new();
    let mut sessions = FetchSessions::new();
    let mut app = App::new(&config.tables);

    // Forward terminal key events into the action channel.
    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(Ok(event)) = events.next().await {
            if let CrosstermEvent::Key(key) = event {
                if input_tx.send(Action::Input(key)).await.is_err() {
                    break;
                }
            }
        }
    });

    for action in app.startup_actions() {
        handle_side_effects(action, client.clone(), tx.clone(), &mut sessions, &tracker);
    }

    let mut tick = tokio::time::interval(Duration::from_millis(cli.tick_ms.max(50)));
    // Startup already probed the connection; the first poll waits a full period.
    let poll_period = config.connection.status_poll_interval();
    let mut status_poll =
        tokio::time::interval_at(tokio::time::Instant::now() + poll_period, poll_period);
    status_poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| ui::render(f, &mut app))?;

        tokio::select! {
            maybe_action = rx.recv() => {
                let Some(action) = maybe_action else { break };
                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(resolved) => resolved,
                        None => continue,
                    },
                    other => other,
                };
                app.update(action.clone());
                if app.should_quit {
                    break;
                }
                handle_side_effects(action, client.clone(), tx.clone(), &mut sessions, &tracker);
                for followup in app.drain_pending() {
                    handle_side_effects(followup, client.clone(), tx.clone(), &mut sessions, &tracker);
                }
            }
            _ = tick.tick() => {
                app.update(Action::Tick);
            }
            _ = status_poll.tick() => {
                handle_side_effects(Action::CheckStatus, client.clone(), tx.clone(), &mut sessions, &tracker);
            }
        }
    }

    // Let in-flight tasks finish before tearing the channel down.
    tracker.close();
    drop(rx);
    tracker.wait().await;

    // TerminalGuard restores raw mode and the alternate screen on drop.
    terminal.show_cursor()?;
    Ok(())
}
