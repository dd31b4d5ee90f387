use crate::{
    AvailabilityStatus, Effect, LastKnown, MonitorState, Msg, Notification, NotifyPolicy,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Invariant: a `Notify` effect is produced iff the snapshot status differs
/// from the last-known status, filtered by the notify policy. A first run
/// (no prior record) only seeds the state.
pub fn update(mut state: MonitorState, msg: Msg) -> (MonitorState, Vec<Effect>) {
    let effects = match msg {
        Msg::SnapshotTaken(snapshot) => {
            let prior = state.last_known().map(|last| last.status);
            let latest = LastKnown::from_snapshot(&snapshot);

            let mut effects = Vec::with_capacity(2);
            if should_notify(prior, snapshot.status, state.policy()) {
                effects.push(Effect::Notify(Notification::from_snapshot(&snapshot)));
            }
            effects.push(Effect::SaveState(latest.clone()));
            state.record(latest);
            effects
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn should_notify(
    prior: Option<AvailabilityStatus>,
    current: AvailabilityStatus,
    policy: NotifyPolicy,
) -> bool {
    let Some(prior) = prior else {
        return false;
    };
    if prior == current {
        return false;
    }
    match policy {
        NotifyPolicy::AnyChange => true,
        NotifyPolicy::RestockOnly => current == AvailabilityStatus::Available,
    }
}
