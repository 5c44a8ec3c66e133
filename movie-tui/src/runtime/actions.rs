use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::app::App;
use crate::controller::{Applied, LookupOutcome, LookupRequest};
use crate::lookup::{self, MovieLookup};

use super::action_queue::{Action, OutcomeTx};

/// What the runtime needs to perform lookups.
#[derive(Clone)]
pub(super) struct LookupRunner {
    pub lookup: Arc<dyn MovieLookup>,
    pub timeout: Duration,
    pub outcome_tx: OutcomeTx,
}

pub(super) fn run_action(action: Action, app: &mut App, runner: &LookupRunner) {
    match action {
        Action::Lookup(request) => spawn_lookup(request, runner),
        Action::ClearRecents => {
            app.controller.clear_terms();
            app.clamp_selection();
            app.set_status("Recent searches cleared");
        }
    }
}

/// Run a lookup off the UI loop; its outcome comes back through the outcome channel.
fn spawn_lookup(request: LookupRequest, runner: &LookupRunner) {
    let runner = runner.clone();
    tokio::spawn(async move {
        debug!(id = request.id, query = %request.query, page = request.page, "lookup started");
        let result = lookup::with_timeout(
            runner.lookup.as_ref(),
            &request.query,
            request.page,
            runner.timeout,
        )
        .await;
        if runner
            .outcome_tx
            .send(LookupOutcome { request, result })
            .is_err()
        {
            error!("lookup finished after the event loop stopped");
        }
    });
}

/// Feed a finished lookup into the controller and update status text.
pub(super) fn apply_outcome(app: &mut App, outcome: LookupOutcome) {
    let page = outcome.request.page;
    match app.controller.complete(outcome) {
        Applied::Replaced => {
            app.selected_index = 0;
            app.clear_status();
        }
        Applied::Appended => {
            app.set_status(format!(
                "Loaded page {} ({} movies)",
                page,
                app.controller.results().len()
            ));
        }
        Applied::Exhausted => {
            app.set_status("No more results");
        }
        Applied::Failed => {
            app.selected_index = 0;
            app.clear_status();
        }
        Applied::Stale => {}
    }
    app.clamp_selection();
}
