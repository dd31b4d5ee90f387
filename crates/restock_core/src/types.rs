use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Unavailable => "unavailable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(AvailabilityStatus::Available),
            "unavailable" => Some(AvailabilityStatus::Unavailable),
            _ => None,
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability data read from the retailer at one point in time.
///
/// Sizes are kept ordered so comparisons and message output are deterministic
/// regardless of page markup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub product_id: String,
    pub name: Option<String>,
    pub status: AvailabilityStatus,
    pub sizes: BTreeSet<String>,
    pub buy_link: String,
    /// RFC 3339 timestamp supplied by the caller at fetch time.
    pub checked_at: String,
}

/// Persisted record of the most recent snapshot, used for change detection
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastKnown {
    pub status: AvailabilityStatus,
    pub sizes: BTreeSet<String>,
    pub checked_at: String,
}

impl LastKnown {
    pub fn from_snapshot(snapshot: &ProductSnapshot) -> Self {
        Self {
            status: snapshot.status,
            sizes: snapshot.sizes.clone(),
            checked_at: snapshot.checked_at.clone(),
        }
    }
}

/// Payload for an alert message; everything the formatter needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub product_id: String,
    pub name: Option<String>,
    pub status: AvailabilityStatus,
    pub sizes: BTreeSet<String>,
    pub buy_link: String,
    pub checked_at: String,
}

impl Notification {
    pub fn from_snapshot(snapshot: &ProductSnapshot) -> Self {
        Self {
            product_id: snapshot.product_id.clone(),
            name: snapshot.name.clone(),
            status: snapshot.status,
            sizes: snapshot.sizes.clone(),
            buy_link: snapshot.buy_link.clone(),
            checked_at: snapshot.checked_at.clone(),
        }
    }
}

/// Which status transitions fire a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Only unavailable -> available (a restock).
    #[default]
    RestockOnly,
    /// Any status change in either direction.
    AnyChange,
}

/// Derive a stable product identifier from a product URL: the last non-empty
/// path segment, falling back to the whole trimmed input when it is not a
/// parseable URL.
pub fn product_id_from_link(link: &str) -> String {
    if let Ok(parsed) = url::Url::parse(link) {
        if let Some(segments) = parsed.path_segments() {
            if let Some(last) = segments.filter(|s| !s.is_empty()).next_back() {
                return last.to_string();
            }
        }
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }
    }
    link.trim().to_string()
}
