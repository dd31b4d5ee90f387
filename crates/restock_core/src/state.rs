use crate::{LastKnown, NotifyPolicy};

/// Monitor state threaded through [`crate::update`].
///
/// `last_known` is `None` on the very first run (no persisted state yet); the
/// first snapshot only seeds the record and never fires an alert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorState {
    policy: NotifyPolicy,
    last_known: Option<LastKnown>,
}

impl MonitorState {
    pub fn new(policy: NotifyPolicy, last_known: Option<LastKnown>) -> Self {
        Self { policy, last_known }
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    pub fn last_known(&self) -> Option<&LastKnown> {
        self.last_known.as_ref()
    }

    pub(crate) fn record(&mut self, latest: LastKnown) {
        self.last_known = Some(latest);
    }
}
