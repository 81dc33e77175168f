// ABOUTME: Main entry point for the Quetico 3PL onboarding guide with TUI and CLI support
//
// Binary: quetico-onboarding
// Usage: quetico-onboarding [COMMAND]
// - No command: launches the onboarding wizard
// - steps: print the step catalog

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use quetico_onboarding::app::{App, EventHandler};
use quetico_onboarding::cli::{self, Commands};
use quetico_onboarding::components::LayoutComponent;
use quetico_onboarding::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(catalog) = args.catalog {
        config.catalog.path = Some(catalog);
    }

    let mut app = App::from_config(config)?;

    let result = match args.command {
        Some(Commands::Steps) => cli::steps::execute(app.state.wizard.catalog(), args.format),
        Some(Commands::Tui) | None => {
            tracing::info!(
                steps = app.state.wizard.step_count(),
                "starting onboarding wizard"
            );
            let layout = LayoutComponent::with_preferences(&app.config.ui);
            run_tui(&mut app, &layout)
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(app: &mut App, layout: &LayoutComponent) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, layout, &mut terminal);

    // Always clean up terminal using unified cleanup
    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    app: &mut App,
    layout: &LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms.max(1));

    // Startup guard: ignore keys buffered before the first frame
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        if app.state.should_quit {
            tracing::info!(
                completed = app.state.wizard.completed_steps().len(),
                finished = app.state.wizard.is_finished(),
                "exiting onboarding wizard"
            );
            return Ok(());
        }

        if !event::poll(tick_rate)? {
            continue;
        }

        if let Event::Key(key_event) = event::read()? {
            if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                tracing::debug!(
                    "Ignoring key event {:?} during startup guard period",
                    key_event.code
                );
                continue;
            }

            if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                EventHandler::process_event(app_event, &mut app.state);
            }
        }
    }
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".quetico-onboarding").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".quetico-onboarding/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "quetico-onboarding-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // The TUI owns stdout, so without a log file we stay silent
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quetico_onboarding=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
