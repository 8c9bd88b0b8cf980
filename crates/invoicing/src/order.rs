use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{Amount, DomainError, DomainResult, ValueObject};

/// Placeholder printed for a missing customer field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Category used for items that carry none.
pub const UNSPECIFIED_CATEGORY: &str = "Unspecified";

/// Invoice number, assigned by the order-placement collaborator from a
/// monotonically increasing counter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct InvoiceNumber(u64);

impl InvoiceNumber {
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("invoice number must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for InvoiceNumber {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InvoiceNumber> for u64 {
    fn from(value: InvoiceNumber) -> Self {
        value.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product line of an order.
///
/// Constructed through [`LineItem::new`] so that the quantity is positive and the
/// line total fits in an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord", into = "LineItemRecord")]
pub struct LineItem {
    product_name: String,
    category: Option<String>,
    unit_price: Amount,
    quantity: u32,
    line_total: Amount,
}

impl LineItem {
    pub fn new(
        product_name: impl Into<String>,
        category: Option<String>,
        unit_price: Amount,
        quantity: u32,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("line item quantity must be positive"));
        }

        let line_total = unit_price
            .checked_mul(u64::from(quantity))
            .ok_or_else(|| DomainError::invariant("line item amount overflow"))?;

        Ok(Self {
            product_name: product_name.into(),
            category,
            unit_price,
            quantity,
            line_total,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Raw category as supplied, `None` when the product has none.
    pub fn raw_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Category used for grouping; blank or missing categories resolve to
    /// [`UNSPECIFIED_CATEGORY`].
    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNSPECIFIED_CATEGORY,
        }
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Amount {
        self.line_total
    }
}

impl ValueObject for LineItem {}

/// Wire shape of a [`LineItem`]; the derived total is recomputed on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LineItemRecord {
    product_name: String,
    #[serde(default)]
    category: Option<String>,
    unit_price: Amount,
    quantity: u32,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = DomainError;

    fn try_from(r: LineItemRecord) -> Result<Self, Self::Error> {
        LineItem::new(r.product_name, r.category, r.unit_price, r.quantity)
    }
}

impl From<LineItem> for LineItemRecord {
    fn from(item: LineItem) -> Self {
        Self {
            product_name: item.product_name,
            category: item.category,
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

/// A placed order, as handed to the invoice assembler.
///
/// `total_amount` is supplied by the caller and is expected to equal the sum of
/// the item line totals; the assembler prints it as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub invoice_number: InvoiceNumber,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub items: Vec<LineItem>,
    pub total_amount: Amount,
}

impl Order {
    /// Customer name for display, or [`NOT_AVAILABLE`].
    pub fn display_name(&self) -> &str {
        or_not_available(self.customer_name.as_deref())
    }

    /// Customer phone for display, or [`NOT_AVAILABLE`].
    pub fn display_phone(&self) -> &str {
        or_not_available(self.customer_phone.as_deref())
    }

    /// Customer address for display, or [`NOT_AVAILABLE`].
    pub fn display_address(&self) -> &str {
        or_not_available(self.customer_address.as_deref())
    }

    /// Sum of item line totals, `None` on overflow.
    ///
    /// Used by callers to compute `total_amount`; the assembler never calls it.
    pub fn items_total(&self) -> Option<Amount> {
        Amount::checked_sum(self.items.iter().map(LineItem::line_total))
    }
}

impl ValueObject for Order {}

/// Resolve an optional text field for display: `None`, empty and blank values
/// become [`NOT_AVAILABLE`].
pub fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(name: &str, category: Option<&str>, paise: u64, qty: u32) -> LineItem {
        LineItem::new(name, category.map(str::to_string), Amount::from_paise(paise), qty).unwrap()
    }

    fn order(items: Vec<LineItem>) -> Order {
        Order {
            invoice_number: InvoiceNumber::new(7).unwrap(),
            customer_name: Some("Ravi Kumar".to_string()),
            customer_phone: None,
            customer_address: Some("   ".to_string()),
            status: OrderStatus::Pending,
            order_date: Utc.with_ymd_and_hms(2024, 10, 28, 9, 30, 0).unwrap(),
            items,
            total_amount: Amount::ZERO,
        }
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        let line = item("Sparkler Pack", Some("SPARKLERS"), 5_000, 3);
        assert_eq!(line.line_total(), Amount::from_paise(15_000));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = LineItem::new("Rocket", None, Amount::from_paise(100), 0).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("quantity must be positive") => {}
            _ => panic!("Expected Validation error for zero quantity"),
        }
    }

    #[test]
    fn overflowing_line_total_is_rejected() {
        let err = LineItem::new("Gift Box", None, Amount::from_paise(u64::MAX), 2).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("overflow") => {}
            _ => panic!("Expected InvariantViolation for overflowing line total"),
        }
    }

    #[test]
    fn missing_or_blank_category_resolves_to_unspecified() {
        assert_eq!(item("A", None, 100, 1).category(), UNSPECIFIED_CATEGORY);
        assert_eq!(item("B", Some(""), 100, 1).category(), UNSPECIFIED_CATEGORY);
        assert_eq!(item("C", Some("ROCKET"), 100, 1).category(), "ROCKET");
        assert_eq!(item("B", Some(""), 100, 1).raw_category(), Some(""));
        assert_eq!(item("A", None, 100, 1).raw_category(), None);
    }

    #[test]
    fn blank_customer_fields_display_as_not_available() {
        let o = order(vec![]);
        assert_eq!(o.display_name(), "Ravi Kumar");
        assert_eq!(o.display_phone(), NOT_AVAILABLE);
        assert_eq!(o.display_address(), NOT_AVAILABLE);
    }

    #[test]
    fn invoice_number_zero_is_rejected() {
        assert!(InvoiceNumber::new(0).is_err());
        assert_eq!(InvoiceNumber::new(42).unwrap().to_string(), "42");
    }

    #[test]
    fn items_total_sums_line_totals() {
        let o = order(vec![
            item("A", None, 1_050, 2),
            item("B", None, 300, 1),
        ]);
        assert_eq!(o.items_total(), Some(Amount::from_paise(2_400)));
    }

    #[test]
    fn order_deserializes_and_validates_items() {
        let json = r#"{
            "invoice_number": 12,
            "customer_name": "Ravi",
            "order_date": "2024-10-28T09:30:00Z",
            "items": [
                { "product_name": "Sparkler Pack", "category": "SPARKLERS", "unit_price": 5000, "quantity": 3 }
            ],
            "total_amount": 15000
        }"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.status, OrderStatus::Pending);
        assert_eq!(o.items[0].line_total(), Amount::from_paise(15_000));

        let bad = json.replace("\"quantity\": 3", "\"quantity\": 0");
        assert!(serde_json::from_str::<Order>(&bad).is_err());

        let bad_number = json.replace("\"invoice_number\": 12", "\"invoice_number\": 0");
        assert!(serde_json::from_str::<Order>(&bad_number).is_err());
    }
}
