//! Key handling for the dashboard event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// Outcome of handling one key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// What: Apply a key event to the application state.
///
/// Inputs:
/// - `app`: State to mutate
/// - `key`: Pressed key
///
/// Output:
/// - [`KeyOutcome::Quit`] for quit keys, [`KeyOutcome::Continue`] otherwise
///
/// Details:
/// - `q`/`Esc`/`Ctrl-c` quit; `j`/`k` and arrow keys move the selection;
///   `l` cycles the language; `a` toggles the actions row; space likes the
///   selected card (local fallback in the demo)
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('l') => app.cycle_language(),
        KeyCode::Char('a') => app.show_actions = !app.show_actions,
        KeyCode::Char(' ') => app.like_selected(),
        _ => {}
    }
    KeyOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::i18n::LanguageTag;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_state() -> AppState {
        AppState::new(LanguageTag::En, fixtures::sample_entities(), Vec::new())
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let mut app = sample_state();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), KeyOutcome::Quit);
        assert_eq!(handle_key(&mut app, key(KeyCode::Esc)), KeyOutcome::Quit);
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn navigation_and_toggles_mutate_state() {
        let mut app = sample_state();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('j'))), KeyOutcome::Continue);
        assert_eq!(app.list_state.selected(), Some(1));

        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.list_state.selected(), Some(0));

        handle_key(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.tag(), LanguageTag::Hi);

        let before = app.show_actions;
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_ne!(app.show_actions, before);

        let id = app.entities[0].id().clone();
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.is_liked(&id));
    }
}
