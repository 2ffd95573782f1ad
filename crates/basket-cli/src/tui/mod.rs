//! basket TUI
//!
//! Terminal user interface for one shopping list session. The list is
//! held in memory by the app state and discarded on quit.
//!
//! ## Layout
//!
//! A single item list with a one-line status/input area below it.
//!
//! ## Navigation
//!
//! - j/k or ↑/↓: Move selection up/down
//! - gg / G: Jump to first / last item
//! - q: Quit
//!
//! ## Commands
//!
//! - a: Add item (Tab cycles Name/Qty/Unit, Enter submits, Esc cancels)
//! - Space or Enter: Toggle purchased
//! - d: Remove item (y/n confirmation when configured)
//! - ?: Help overlay

mod app;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use basket_core::Config;

use app::{App, InputMode};

/// Run the TUI application
pub fn run(config: Config) -> Result<()> {
    // Initialize TUI logging (file-based, only if BASKET_LOG is set)
    init_tui_logging(&config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Check for status message timeout
        app.check_status_timeout();

        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for terminal events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // If an error is showing, any key dismisses it
                if app.has_error() {
                    app.clear_error();
                    continue;
                }

                // If help is showing, any key dismisses it
                if app.show_help {
                    app.show_help = false;
                    continue;
                }

                // Handle based on input mode
                match app.input_mode {
                    InputMode::Normal => handle_normal_mode(app, key.code, key.modifiers),
                    InputMode::Add => handle_add_mode(app, key.code, key.modifiers),
                    InputMode::ConfirmRemove => handle_confirm_mode(app, key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle key events in normal mode
fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Clear status message on navigation keys
    match code {
        KeyCode::Char('j')
        | KeyCode::Char('k')
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char('g')
        | KeyCode::Char('G') => {
            app.status_message = None;
        }
        _ => {}
    }

    // Clear pending 'g' if timeout expired (500ms)
    if let Some(time) = app.pending_g {
        if time.elapsed() > Duration::from_millis(500) {
            app.pending_g = None;
        }
    }

    match code {
        // Quit
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }

        // Toggle purchased
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // Add item
        KeyCode::Char('a') => {
            app.enter_add_mode();
        }

        // Remove item
        KeyCode::Char('d') => {
            app.request_remove();
        }

        // Help
        KeyCode::Char('?') => {
            app.toggle_help();
        }

        // Vim navigation: G (go to last)
        KeyCode::Char('G') => {
            app.pending_g = None;
            app.move_to_last();
        }

        // Vim navigation: g (start of gg sequence)
        KeyCode::Char('g') => {
            if app.pending_g.is_some() {
                // Second 'g' - complete the gg sequence
                app.pending_g = None;
                app.move_to_first();
            } else {
                // First 'g' - start the sequence
                app.pending_g = Some(std::time::Instant::now());
            }
        }

        _ => {
            // Any other key clears pending 'g'
            app.pending_g = None;
        }
    }
}

/// Handle key events in the add form
fn handle_add_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        // Cancel
        KeyCode::Esc => {
            app.cancel_add();
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.cancel_add();
        }

        // Submit
        KeyCode::Enter => {
            app.submit_add();
        }

        // Field navigation
        KeyCode::Tab | KeyCode::Down => {
            app.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.prev_field();
        }

        // Text input
        KeyCode::Char(c) => {
            app.insert_char(c);
        }
        KeyCode::Backspace => {
            app.delete_char();
        }

        _ => {}
    }
}

/// Handle key events while confirming a removal
fn handle_confirm_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_remove(true);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_remove(false);
        }
        _ => {}
    }
}

/// Initialize logging for TUI mode
///
/// Only initializes if the BASKET_LOG environment variable is set.
/// Logs to file (config.log_file or a default in the cache dir).
fn init_tui_logging(config: &Config) {
    // Only log if BASKET_LOG is set
    let Ok(log_level) = std::env::var("BASKET_LOG") else {
        return;
    };

    // Determine log file path
    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(Config::default_log_path);

    // Create log file
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "basket_core={},basket_cli={}",
        log_level, log_level
    ));

    // Initialize file-based logging (ignore error if already initialized)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}
