//! Checks run before an order is placed.
//!
//! The storefront validates the customer form and cart, then builds the
//! [`Order`] that is persisted and invoiced. Every failed check is reported, so
//! a form can flag all bad fields at once.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use storefront_core::{Amount, DomainError};

use crate::order::{InvoiceNumber, LineItem, Order, OrderStatus};

/// Customer details as typed into the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Address,
    Cart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All checks that failed for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementErrors(pub Vec<FieldError>);

impl PlacementErrors {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().map(|e| e.field)
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }
}

impl core::fmt::Display for PlacementErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for PlacementErrors {}

impl From<PlacementErrors> for DomainError {
    fn from(errors: PlacementErrors) -> Self {
        DomainError::validation(errors.to_string())
    }
}

fn name_pattern() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^[a-zA-Z\s.]+$").expect("name pattern compiles"))
}

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"))
}

/// Form and cart rules for placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementRules {
    pub minimum_order: Amount,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            minimum_order: Amount::from_paise(300_000),
        }
    }
}

impl PlacementRules {
    /// Validate the customer form.
    pub fn check_details(&self, details: &CustomerDetails) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name_len = details.name.chars().count();
        if !(3..=50).contains(&name_len) || !name_pattern().is_match(&details.name) {
            errors.push(FieldError::new(
                Field::Name,
                "Name must be 3-50 characters and contain only letters, spaces, and dots",
            ));
        }

        let address_len = details.address.chars().count();
        if !(10..=100).contains(&address_len) || details.address.contains(['<', '>']) {
            errors.push(FieldError::new(
                Field::Address,
                "Address must be between 10 and 100 characters and not contain < or >",
            ));
        }

        if !phone_pattern().is_match(&details.phone) {
            errors.push(FieldError::new(
                Field::Phone,
                "Please enter a valid 10-digit phone number",
            ));
        }

        errors
    }

    /// Validate the cart and return its total.
    pub fn check_cart(&self, items: &[LineItem]) -> Result<Amount, FieldError> {
        if items.is_empty() {
            return Err(FieldError::new(Field::Cart, "Your cart is empty!"));
        }

        let total = Amount::checked_sum(items.iter().map(LineItem::line_total))
            .ok_or_else(|| FieldError::new(Field::Cart, "Cart total is too large"))?;

        if total < self.minimum_order {
            return Err(FieldError::new(
                Field::Cart,
                format!("Order total must be at least ₹{}", self.minimum_order),
            ));
        }

        Ok(total)
    }

    /// Run every check and build a `Pending` order with a computed total.
    pub fn place(
        &self,
        details: CustomerDetails,
        items: Vec<LineItem>,
        invoice_number: InvoiceNumber,
        order_date: DateTime<Utc>,
    ) -> Result<Order, PlacementErrors> {
        let mut errors = self.check_details(&details);
        let total = match self.check_cart(&items) {
            Ok(total) => Some(total),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let total_amount = match total {
            Some(total) if errors.is_empty() => total,
            _ => {
                tracing::debug!(failed = errors.len(), "order placement rejected");
                return Err(PlacementErrors(errors));
            }
        };

        Ok(Order {
            invoice_number,
            customer_name: Some(details.name),
            customer_phone: Some(details.phone),
            customer_address: Some(details.address),
            status: OrderStatus::Pending,
            order_date,
            items,
            total_amount,
        })
    }
}
