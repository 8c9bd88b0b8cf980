//! Order notification summary for the shop owner.
//!
//! Builds the message text and the `wa.me` deep link that hands it to WhatsApp.
//! Opening the link and attaching the rendered invoice are up to the caller.

use serde::{Deserialize, Serialize};
use url::Url;

use storefront_core::{DomainError, DomainResult};

use crate::order::Order;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Recipient in international format without `+`, digits only.
    pub recipient: String,
    /// Messages longer than this many characters are cut.
    pub max_message_chars: usize,
    /// Characters kept from an over-long message before the ellipsis.
    pub truncated_chars: usize,
}

impl NotificationConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: NotificationConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::config(format!("notification config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.recipient.is_empty() || !self.recipient.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::config(
                "notification recipient must be a non-empty digit string",
            ));
        }
        if self.truncated_chars >= self.max_message_chars {
            return Err(DomainError::config(
                "truncated_chars must be smaller than max_message_chars",
            ));
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            recipient: "918778915065".to_string(),
            max_message_chars: 4000,
            truncated_chars: 3990,
        }
    }
}

/// Everything needed to notify the shop about a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNotification {
    pub message: String,
    pub link: Url,
    /// File name for the rendered invoice sent alongside the message.
    pub attachment_name: String,
}

/// Suggested file name for an order's invoice document.
pub fn attachment_name(order: &Order) -> String {
    format!("order_summary_{}.pdf", order.invoice_number)
}

/// Message text listing the order in cart order.
pub fn order_message(order: &Order) -> String {
    let items: Vec<String> = order
        .items
        .iter()
        .map(|item| {
            format!(
                "{} - Qty: {} - ₹{}",
                item.product_name(),
                item.quantity(),
                item.line_total()
            )
        })
        .collect();

    format!(
        "New Order Received!\n\n\
         Invoice No.: {}\n\
         Customer: {}\n\
         Phone: {}\n\
         Address: {}\n\
         Status: {}\n\
         Total Amount: ₹{}\n\n\
         Items:\n{}\n\n\
         Note: The detailed order summary PDF is attached.",
        order.invoice_number,
        order.display_name(),
        order.display_phone(),
        order.display_address(),
        order.status,
        order.total_amount,
        items.join("\n"),
    )
}

/// Build the notification for `order`.
pub fn build_notification(
    order: &Order,
    config: &NotificationConfig,
) -> DomainResult<OrderNotification> {
    config.validate()?;

    let mut message = order_message(order);
    let chars = message.chars().count();
    if chars > config.max_message_chars {
        tracing::warn!(
            invoice_number = %order.invoice_number,
            chars,
            "order message too long, truncating"
        );
        message = truncate_chars(&message, config.truncated_chars);
    }

    let base = format!("https://wa.me/{}", config.recipient);
    let link = Url::parse_with_params(&base, &[("text", message.as_str())])
        .map_err(|e| DomainError::config(format!("notification link: {e}")))?;

    Ok(OrderNotification {
        message,
        link,
        attachment_name: attachment_name(order),
    })
}

fn truncate_chars(s: &str, keep: usize) -> String {
    match s.char_indices().nth(keep) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
