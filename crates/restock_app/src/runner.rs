use chrono::Utc;
use monitor_logging::monitor_info;
use restock_core::{update, AvailabilityStatus, Effect, MonitorState, Msg};
use restock_engine::{
    decode_html, format_notification, AvailabilityParser, DecodeError, FetchError, Fetcher,
    Notifier, NotifyError, ParseError, ProductPageParser,
};
use thiserror::Error;

use crate::config::Config;
use crate::state_file::{self, StateFileError};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
    #[error("notify failed: {0}")]
    Notify(#[from] NotifyError),
    #[error("state write failed: {0}")]
    State(#[from] StateFileError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// First run: the state file was seeded, no alert considered.
    Seeded(AvailabilityStatus),
    /// Status matched the last-known record.
    Unchanged(AvailabilityStatus),
    /// A status change fired an alert.
    Notified(AvailabilityStatus),
}

/// One complete check: load state, fetch, decode, parse, run the pure update,
/// then execute its effects in order. `Notify` comes before `SaveState`, so a
/// failed send aborts the run with the old state intact and the next
/// scheduled run re-detects the change and retries the alert.
pub async fn run_check(
    config: &Config,
    fetcher: &dyn Fetcher,
    notifier: &dyn Notifier,
) -> Result<CheckOutcome, CheckError> {
    let prior = state_file::load_last_known(&config.state_path);
    let had_prior = prior.is_some();
    let state = MonitorState::new(config.notify_policy, prior);

    monitor_info!("Checking {}", config.product_url);
    let output = fetcher.fetch(&config.product_url).await?;
    let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())?;
    let parsed = ProductPageParser.parse(&decoded.html)?;
    let snapshot = parsed.into_snapshot(&output.metadata.final_url, Utc::now().to_rfc3339());
    let status = snapshot.status;
    monitor_info!(
        "Product {} is {} ({} sizes)",
        snapshot.product_id,
        status,
        snapshot.sizes.len()
    );

    let (_state, effects) = update(state, Msg::SnapshotTaken(snapshot));

    let mut notified = false;
    for effect in effects {
        match effect {
            Effect::Notify(notification) => {
                notifier.send(&format_notification(&notification)).await?;
                notified = true;
            }
            Effect::SaveState(last) => {
                state_file::save_last_known(&config.state_path, &last)?;
            }
        }
    }

    Ok(if notified {
        CheckOutcome::Notified(status)
    } else if had_prior {
        CheckOutcome::Unchanged(status)
    } else {
        CheckOutcome::Seeded(status)
    })
}
