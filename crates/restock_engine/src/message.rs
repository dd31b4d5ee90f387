use restock_core::{AvailabilityStatus, Notification};

/// Build the Telegram message body (Markdown) for one notification.
pub fn format_notification(notification: &Notification) -> String {
    let name = notification
        .name
        .as_deref()
        .unwrap_or(&notification.product_id);

    let mut lines = Vec::new();
    match notification.status {
        AvailabilityStatus::Available => {
            lines.push(format!("🚨 *Restock alert — {name}*"));
        }
        AvailabilityStatus::Unavailable => {
            lines.push(format!("*{name} is sold out*"));
        }
    }
    lines.push(String::new());
    lines.push(format!("*Status:* {}", notification.status));

    if notification.sizes.is_empty() {
        lines.push("*Sizes:* check product page".to_string());
    } else {
        let sizes = notification
            .sizes
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("*Available sizes:* {sizes}"));
    }

    lines.push(format!("*Checked:* {}", notification.checked_at));
    lines.push(format!("🛒 *Buy now:* {}", notification.buy_link));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn notification(status: AvailabilityStatus, sizes: &[&str]) -> Notification {
        Notification {
            product_id: "AQ0113-001".to_string(),
            name: Some("Air Force 1 City Pack Paris".to_string()),
            status,
            sizes: sizes.iter().map(ToString::to_string).collect::<BTreeSet<_>>(),
            buy_link: "https://nike.com/x".to_string(),
            checked_at: "2026-08-25T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn restock_message_carries_status_sizes_and_link() {
        let text = format_notification(&notification(AvailabilityStatus::Available, &["10", "9"]));
        assert!(text.contains("available"));
        assert!(text.contains("10, 9"));
        assert!(text.contains("https://nike.com/x"));
        assert!(text.contains("Air Force 1 City Pack Paris"));
    }

    #[test]
    fn empty_size_set_points_at_the_page() {
        let text = format_notification(&notification(AvailabilityStatus::Available, &[]));
        assert!(text.contains("check product page"));
    }

    #[test]
    fn sellout_message_says_sold_out() {
        let text = format_notification(&notification(AvailabilityStatus::Unavailable, &[]));
        assert!(text.contains("sold out"));
        assert!(text.contains("unavailable"));
    }

    #[test]
    fn nameless_product_falls_back_to_id() {
        let mut n = notification(AvailabilityStatus::Available, &["8"]);
        n.name = None;
        let text = format_notification(&n);
        assert!(text.contains("AQ0113-001"));
    }
}
