use crate::controller::{LookupOutcome, LookupRequest};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    Lookup(LookupRequest),
    ClearRecents,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) type OutcomeTx = UnboundedSender<LookupOutcome>;
pub(super) type OutcomeRx = UnboundedReceiver<LookupOutcome>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

pub(super) fn outcome_channel() -> (OutcomeTx, OutcomeRx) {
    mpsc::unbounded_channel()
}
