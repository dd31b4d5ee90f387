//! Restock core: pure availability-change detection.
//!
//! Everything here is side-effect free. The app layer feeds a freshly parsed
//! [`ProductSnapshot`] into [`update`] and executes the returned effects.
mod effect;
mod msg;
mod state;
mod types;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use state::MonitorState;
pub use types::{
    product_id_from_link, AvailabilityStatus, LastKnown, Notification, NotifyPolicy,
    ProductSnapshot,
};
pub use update::update;
