use crate::app::App;
use crate::lookup::MovieLookup;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use super::action_queue::{channel, outcome_channel, Action};
use super::actions::{apply_outcome, run_action, LookupRunner};
use super::views::handle_key;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Drive the UI. Input, debounce deadlines and lookup completions are all
/// handled on this loop, so controller state is only touched here.
pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    lookup: Arc<dyn MovieLookup>,
    timeout: Duration,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let (outcome_tx, mut outcome_rx) = outcome_channel();
    let runner = LookupRunner {
        lookup,
        timeout,
        outcome_tx,
    };

    info!("event loop started");

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.controller.is_loading() {
            app.throbber_state.calc_next();
        }

        if event::poll(poll_timeout(app, Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, &action_tx, Instant::now());
                }
            }
        }

        if let Some(request) = app.controller.tick(Instant::now()) {
            let _ = action_tx.send(Action::Lookup(request));
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, &runner);
        }

        // Give spawned lookups a chance to make progress before draining.
        tokio::task::yield_now().await;

        while let Ok(outcome) = outcome_rx.try_recv() {
            apply_outcome(app, outcome);
        }

        if !app.running {
            break;
        }
    }

    info!("event loop stopped");
    Ok(())
}

/// Wake up no later than the pending debounce deadline.
fn poll_timeout(app: &App, now: Instant) -> Duration {
    app.controller
        .next_deadline()
        .map(|deadline| deadline.saturating_duration_since(now))
        .map_or(INPUT_POLL_INTERVAL, |remaining| {
            remaining.min(INPUT_POLL_INTERVAL)
        })
}
