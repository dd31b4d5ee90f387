use crate::{LastKnown, Notification};

/// Side effects requested by the pure update function, executed by the app.
///
/// Ordering matters: `Notify` always precedes `SaveState` so the executor can
/// treat send-then-save as one transactional step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    SaveState(LastKnown),
}
