use std::collections::BTreeSet;

use restock_core::{product_id_from_link, AvailabilityStatus, ProductSnapshot};
use scraper::{ElementRef, Html, Selector};

/// Raw availability signals pulled out of a product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProduct {
    pub name: Option<String>,
    /// Size labels whose controls are enabled (purchasable right now).
    pub sizes: BTreeSet<String>,
    /// An enabled add-to-cart control was present.
    pub add_to_cart_enabled: bool,
}

impl ParsedProduct {
    pub fn status(&self) -> AvailabilityStatus {
        if !self.sizes.is_empty() || self.add_to_cart_enabled {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Unavailable
        }
    }

    /// Assemble the per-run snapshot. `buy_link` is the post-redirect page
    /// URL; `checked_at` is an RFC 3339 timestamp supplied by the caller.
    pub fn into_snapshot(self, buy_link: &str, checked_at: String) -> ProductSnapshot {
        let status = self.status();
        ProductSnapshot {
            product_id: product_id_from_link(buy_link),
            name: self.name,
            status,
            sizes: self.sizes,
            buy_link: buy_link.to_string(),
            checked_at,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The page has neither size controls nor an add-to-cart control. A page
    /// we cannot read must fail the run instead of reporting "unavailable".
    #[error("no availability markup found in product page")]
    NoAvailabilitySignal,
}

pub trait AvailabilityParser: Send + Sync {
    fn parse(&self, html: &str) -> Result<ParsedProduct, ParseError>;
}

/// Default parser for retailer product pages:
/// - size labels come from enabled `button`s with "size" in their class
/// - an enabled button whose text reads "Add to Bag"/"Add to Cart" also
///   counts as available (single-size products have no size grid)
/// - product name from `og:title`, then `<title>`, then the first `<h1>`.
#[derive(Debug, Default)]
pub struct ProductPageParser;

impl AvailabilityParser for ProductPageParser {
    fn parse(&self, html: &str) -> Result<ParsedProduct, ParseError> {
        let doc = Html::parse_document(html);

        let size_sel = Selector::parse(r#"button[class*="size"]"#).ok();
        let button_sel = Selector::parse("button").ok();

        let mut saw_size_controls = false;
        let mut sizes = BTreeSet::new();
        if let Some(sel) = size_sel.as_ref() {
            for button in doc.select(sel) {
                saw_size_controls = true;
                if is_disabled(&button) {
                    continue;
                }
                let label = element_text(&button);
                if !label.is_empty() {
                    sizes.insert(label);
                }
            }
        }

        let mut saw_cart_control = false;
        let mut add_to_cart_enabled = false;
        if let Some(sel) = button_sel.as_ref() {
            for button in doc.select(sel) {
                let text = element_text(&button).to_lowercase();
                if text.contains("add to bag") || text.contains("add to cart") {
                    saw_cart_control = true;
                    if !is_disabled(&button) {
                        add_to_cart_enabled = true;
                    }
                }
            }
        }

        if !saw_size_controls && !saw_cart_control {
            return Err(ParseError::NoAvailabilitySignal);
        }

        Ok(ParsedProduct {
            name: extract_name(&doc),
            sizes,
            add_to_cart_enabled,
        })
    }
}

fn is_disabled(button: &ElementRef<'_>) -> bool {
    button.value().attr("disabled").is_some()
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn extract_name(doc: &Html) -> Option<String> {
    let og_title_sel = Selector::parse(r#"meta[property="og:title"]"#).ok();
    if let Some(sel) = og_title_sel.as_ref() {
        if let Some(meta) = doc.select(sel).next() {
            if let Some(content) = meta.value().attr("content") {
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }

    for selector in ["title", "h1"] {
        let Ok(sel) = Selector::parse(selector) else {
            continue;
        };
        if let Some(node) = doc.select(&sel).next() {
            let text = element_text(&node);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}
