//! Application runtime: terminal lifecycle and the event loop.

use std::io::Stdout;
use std::time::Duration;

use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::{Args, resolve_tag};
use crate::events::{KeyOutcome, handle_key};
use crate::i18n::load_override_dir;
use crate::state::AppState;
use crate::{fixtures, ui};

/// Boxed error type used at the application boundary.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Put the terminal into raw mode on the alternate screen.
///
/// # Errors
/// - Returns `Err` when the terminal refuses raw mode or the screen switch
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// What: Undo [`setup_terminal`].
///
/// # Errors
/// - Returns `Err` when the terminal state cannot be restored
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// What: Assemble the application state from arguments.
///
/// Details:
/// - Fixture and catalog-override problems are logged and fall back to the
///   embedded data; they never abort startup
fn build_state(args: &Args) -> AppState {
    let tag = resolve_tag(args);

    let entities = args.fixtures.as_ref().map_or_else(
        fixtures::sample_entities,
        |path| match fixtures::load_fixtures(path) {
            Ok(records) => {
                tracing::info!(path = %path.display(), count = records.len(), "loaded fixtures");
                records
            }
            Err(e) => {
                tracing::warn!("{}; using embedded samples", e);
                fixtures::sample_entities()
            }
        },
    );

    let overrides = args
        .locale_dir
        .as_ref()
        .map(|dir| load_override_dir(dir))
        .unwrap_or_default();

    let mut app = AppState::new(tag, entities, overrides);
    app.show_actions = !args.hide_actions;
    app
}

/// What: Run the dashboard until the user quits.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// # Errors
/// - Returns `Err` when terminal setup, drawing or input reading fails
///
/// Details:
/// - Input is read on a dedicated thread and forwarded over a channel so the
///   async runtime never blocks on the terminal
/// - The terminal is restored before propagating a loop error
pub async fn run(args: &Args) -> Result<()> {
    let mut app = build_state(args);
    tracing::info!(
        language = %app.tag(),
        entities = app.entities.len(),
        "dashboard starting"
    );

    setup_terminal()?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let terminal = Terminal::new(backend)?;

    let result = event_loop(terminal, &mut app).await;
    restore_terminal()?;
    result
}

/// What: Drive drawing and input handling until quit.
async fn event_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    std::thread::spawn(move || {
        loop {
            // Poll with a timeout so the reader notices a dropped receiver.
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        break;
                    };
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        match rx.recv().await {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if handle_key(app, key) == KeyOutcome::Quit {
                    tracing::info!("quit requested");
                    break;
                }
            }
            // Resize and other terminal events just trigger a redraw.
            Some(_) => {}
            None => break,
        }
    }
    Ok(())
}
