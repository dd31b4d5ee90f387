//! Restock engine: the IO side of a check run.
//!
//! Fetch a product page, decode it to UTF-8, parse availability into a
//! [`restock_core::ProductSnapshot`], format and send Telegram alerts, and
//! persist the last-known state atomically.
mod decode;
mod fetch;
mod message;
mod notify;
mod parse;
mod persist;
mod types;

pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use message::format_notification;
pub use notify::{Notifier, NotifyError, TelegramNotifier, TelegramSettings};
pub use parse::{AvailabilityParser, ParseError, ParsedProduct, ProductPageParser};
pub use persist::{write_atomic, PersistError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
