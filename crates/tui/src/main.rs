//! BA Roadmap - interactive business analyst skills roadmap for the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop and apply tour timer commands.
//!
//! Does NOT handle:
//! - Tour semantics (see `ba_roadmap::tour`).
//! - Configuration parsing (see `crates/config`).
//! - Timer tasks (see `runtime::scheduler`).
//!
//! Invariants:
//! - Content and configuration are validated before the terminal is touched.
//! - The TUI enters raw mode and alternate screen on startup.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Nothing is written to stdout while raw mode is active; logs go to a file.

use std::sync::Arc;

use anyhow::{Context, Result};
use ba_roadmap::action::Action;
use ba_roadmap::app::App;
use ba_roadmap::cli::Cli;
use ba_roadmap::content::ContentStore;
use ba_roadmap::runtime::{config::load_config, scheduler::TourScheduler, terminal::TerminalGuard};
use ba_roadmap::ui::outline::render_outline;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use roadmap_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = ContentStore::builtin().context("Embedded roadmap content is invalid")?;

    if cli.outline {
        print!("{}", render_outline(&content));
        return Ok(());
    }

    // Initialize file-based logging with configurable directory
    let log_file_name = "ba-roadmap.log";
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, log_file_name);
    let (non_blocking, _guard) = non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let config = load_config(&cli)?;
    let content = Arc::new(content);
    let phase = cli.phase.unwrap_or_default();
    tracing::info!(
        topics = content.len(),
        %phase,
        theme = %config.theme,
        autoplay = config.autoplay,
        "Starting ba-roadmap"
    );

    let no_mouse = cli.no_mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();

    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }

    // Restores the terminal on panic/unwind.
    let _terminal_guard = TerminalGuard::new(no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let task_tracker = TaskTracker::new();
    let shutdown = CancellationToken::new();
    task_tracker.spawn(forward_input(tx.clone(), shutdown.clone()));

    let mut scheduler = TourScheduler::new(tx);
    let mut app = App::new(&config, content, phase);
    if config.autoplay {
        scheduler.apply(app.start_tour());
    }

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                if !action.is_noisy() {
                    tracing::debug!(?action, "Handling action");
                }

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    tracing::info!("Quit requested");
                    break;
                }

                if let Some(command) = app.update(action) {
                    scheduler.apply(command);
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Graceful shutdown: cancel timers and input, then wait for tasks
    shutdown.cancel();
    scheduler.shutdown().await;
    task_tracker.close();
    task_tracker.wait().await;

    // Restore terminal
    disable_raw_mode()?;

    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }

    terminal.show_cursor()?;

    Ok(())
}

/// Forward terminal events into the action channel until cancelled.
async fn forward_input(tx: Sender<Action>, shutdown: CancellationToken) {
    let mut reader = EventStream::new();
    loop {
        let event = tokio::select! {
            _ = shutdown.cancelled() => break,
            event = reader.next() => event,
        };
        let event = match event {
            Some(Ok(event)) => event,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Terminal event stream failed");
                break;
            }
            None => break,
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Key and resize events carry user intent; wait for room.
                if tx.send(Action::Input(key)).await.is_err() {
                    break;
                }
            }
            Event::Resize(width, height) => {
                if tx.send(Action::Resize(width, height)).await.is_err() {
                    break;
                }
            }
            Event::Mouse(mouse) => match tx.try_send(Action::Mouse(mouse)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!("Input channel full, dropping mouse event");
                }
                Err(TrySendError::Closed(_)) => break,
            },
            _ => {}
        }
    }
}
