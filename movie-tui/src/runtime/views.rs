use crate::app::{App, Focus};
use crate::controller::LookupRequest;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use super::action_queue::{Action, ActionTx};

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn enqueue_lookup(action_tx: &ActionTx, request: Option<LookupRequest>) {
    if let Some(request) = request {
        enqueue_action(action_tx, Action::Lookup(request));
    }
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx, now: Instant) {
    if handle_global_key(key, app, action_tx) {
        return;
    }
    match app.focus {
        Focus::Input => handle_input_key(key, app, action_tx, now),
        Focus::List => handle_list_key(key, app, action_tx, now),
    }
}

fn handle_global_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('r') if ctrl => {
            if app.reset() {
                app.set_status("Search cleared");
            } else {
                app.set_status("Wait for the current search to finish");
            }
        }
        KeyCode::Char('d') if ctrl => enqueue_action(action_tx, Action::ClearRecents),
        KeyCode::Char('n') if ctrl => {
            let request = app.controller.load_next_page();
            enqueue_lookup(action_tx, request);
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Input => Focus::List,
                Focus::List => Focus::Input,
            };
        }
        _ => return false,
    }
    true
}

fn handle_input_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx, now: Instant) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_clear(now);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_char(c, now);
        }
        KeyCode::Backspace => app.input_backspace(now),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        KeyCode::Enter => {
            let request = app.search_now();
            enqueue_lookup(action_tx, request);
        }
        KeyCode::Down => {
            if !app.rows().is_empty() {
                app.focus = Focus::List;
            }
        }
        _ => {}
    }
}

fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => {
            if app.selected_index == 0 {
                app.focus = Focus::Input;
            } else {
                app.select_previous();
            }
        }
        KeyCode::Enter => {
            let request = app.activate_selected();
            enqueue_lookup(action_tx, request);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Typing from the list jumps back into the search box.
            app.focus = Focus::Input;
            app.input_char(c, now);
        }
        KeyCode::Backspace => {
            app.focus = Focus::Input;
            app.input_backspace(now);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_store::MemoryTermStore;
    use std::time::Duration;

    use super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        App::new(
            Box::new(MemoryTermStore::new()),
            Duration::from_millis(500),
            "test",
        )
    }

    fn press(app: &mut App, event: KeyEvent) -> Option<Action> {
        let (tx, mut rx) = channel();
        handle_key(event, app, &tx, Instant::now());
        rx.try_recv().ok()
    }

    #[test]
    fn typing_does_not_enqueue_lookups() {
        let mut app = test_app();
        for c in "Heat".chars() {
            assert!(press(&mut app, key(KeyCode::Char(c))).is_none());
        }
        assert_eq!(app.input.value, "Heat");
        assert!(app.controller.is_debouncing());
    }

    #[test]
    fn enter_in_input_searches_immediately() {
        let mut app = test_app();
        app.input.set("  Heat ");
        match press(&mut app, key(KeyCode::Enter)) {
            Some(Action::Lookup(request)) => {
                assert_eq!(request.query, "Heat");
                assert_eq!(request.page, 1);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn enter_on_empty_input_enqueues_nothing() {
        let mut app = test_app();
        assert!(press(&mut app, key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn enter_on_suggestion_searches_term() {
        let mut app = test_app();
        press(&mut app, key(KeyCode::Down));
        assert_eq!(app.focus, Focus::List);
        press(&mut app, key(KeyCode::Char('j')));

        match press(&mut app, key(KeyCode::Enter)) {
            Some(Action::Lookup(request)) => assert_eq!(request.query, "Dune"),
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(app.input.value, "Dune");
    }

    #[test]
    fn up_from_top_of_list_returns_to_input() {
        let mut app = test_app();
        app.focus = Focus::List;
        press(&mut app, key(KeyCode::Up));
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn ctrl_d_enqueues_clear_recents() {
        let mut app = test_app();
        assert!(matches!(press(&mut app, ctrl('d')), Some(Action::ClearRecents)));
    }

    #[test]
    fn ctrl_n_without_results_is_noop() {
        let mut app = test_app();
        assert!(press(&mut app, ctrl('n')).is_none());
    }

    #[test]
    fn q_only_quits_from_list() {
        let mut app = test_app();
        press(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.input.value, "q");

        app.focus = Focus::List;
        press(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn ctrl_x_clears_input() {
        let mut app = test_app();
        app.input.set("Heat");
        press(&mut app, ctrl('x'));
        assert_eq!(app.input.value, "");
    }
}
