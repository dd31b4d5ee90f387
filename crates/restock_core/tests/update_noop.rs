use std::sync::Once;

use restock_core::{update, MonitorState, Msg, NotifyPolicy};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(monitor_logging::initialize_for_tests);
}

#[test]
fn noop_changes_nothing() {
    init_logging();
    let state = MonitorState::new(NotifyPolicy::RestockOnly, None);
    let before = state.clone();

    let (next, effects) = update(state, Msg::NoOp);

    assert_eq!(next, before);
    assert!(effects.is_empty());
}
