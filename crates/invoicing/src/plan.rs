//! Invoice rendering plan and its assembler.
//!
//! An [`InvoicePlan`] is the backend-agnostic content of one invoice: every string
//! a renderer prints, already formatted, in reading order. Assembling a plan is a
//! pure function of the order, the seller profile and the category precedence.

use serde::{Deserialize, Serialize};

use crate::category::CategoryOrder;
use crate::numerals::amount_in_words;
use crate::order::{InvoiceNumber, LineItem, Order, OrderStatus};
use crate::seller::{ImageAsset, SellerProfile};

/// Item names longer than this many characters are cut.
pub const NAME_LIMIT: usize = 30;

/// Marker appended to a cut item name.
pub const ELLIPSIS: &str = "...";

pub const DOCUMENT_TITLE: &str = "Tax Invoice";
pub const WORDS_HEADING: &str = "INVOICE AMOUNT IN WORDS";
pub const FOOTER: &str = "THANK YOU VISIT AGAIN";

/// Item table column headings, left to right.
pub const COLUMNS: [&str; 6] = ["S.No", "Item name", "HSN/SAC", "Qty", "Price/unit", "Amount"];

/// HSN/SAC codes are not tracked per product; the column prints a dash.
const NO_HSN_SAC: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerBlock {
    pub name: String,
    pub address_lines: Vec<String>,
    pub phone_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub title: String,
    pub invoice_number: InvoiceNumber,
    /// `dd/mm/yyyy`.
    pub date: String,
    pub status: OrderStatus,
}

/// Customer block; every field is already resolved to a printable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBlock {
    pub upi_id: Option<String>,
    pub qr_code: Option<ImageAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// 1-based, continuous across category sections.
    pub seq: usize,
    pub item_name: String,
    pub hsn_sac: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Rows of one category, printed under a category heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSection {
    pub category: String,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTable {
    pub columns: Vec<String>,
    pub sections: Vec<TableSection>,
}

impl ItemTable {
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsBlock {
    pub subtotal: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsBlock {
    pub heading: String,
    pub text: String,
}

/// Full content of one invoice, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePlan {
    pub seller: SellerBlock,
    pub header: InvoiceHeader,
    pub bill_to: BillTo,
    pub payment: PaymentBlock,
    pub table: ItemTable,
    pub totals: TotalsBlock,
    pub amount_in_words: WordsBlock,
    pub footer: String,
}

/// Builds [`InvoicePlan`]s for one seller.
#[derive(Debug, Clone, Default)]
pub struct InvoiceAssembler {
    seller: SellerProfile,
    categories: CategoryOrder,
}

impl InvoiceAssembler {
    pub fn new(seller: SellerProfile, categories: CategoryOrder) -> Self {
        Self { seller, categories }
    }

    pub fn seller(&self) -> &SellerProfile {
        &self.seller
    }

    pub fn categories(&self) -> &CategoryOrder {
        &self.categories
    }

    /// Assemble the plan for `order`.
    ///
    /// Totals print `order.total_amount` as supplied; they are not re-derived from
    /// the items. The date is printed in the seller's local time zone.
    pub fn assemble(&self, order: &Order) -> InvoicePlan {
        let table = self.item_table(&order.items);

        tracing::debug!(
            invoice_number = %order.invoice_number,
            sections = table.sections.len(),
            rows = table.row_count(),
            "assembled invoice plan"
        );

        if self.seller.payment_qr.is_none() {
            tracing::warn!(
                invoice_number = %order.invoice_number,
                "payment QR not configured, omitting from invoice"
            );
        }

        let total = order.total_amount.to_string();

        InvoicePlan {
            seller: SellerBlock {
                name: self.seller.name.clone(),
                address_lines: self.seller.address_lines.clone(),
                phone_line: self.seller.phone_line(),
            },
            header: InvoiceHeader {
                title: DOCUMENT_TITLE.to_string(),
                invoice_number: order.invoice_number,
                date: order
                    .order_date
                    .with_timezone(&self.seller.timezone())
                    .format("%d/%m/%Y")
                    .to_string(),
                status: order.status,
            },
            bill_to: BillTo {
                name: order.display_name().to_string(),
                address: order.display_address().to_string(),
                phone: order.display_phone().to_string(),
            },
            payment: PaymentBlock {
                upi_id: self.seller.upi_id.clone(),
                qr_code: self.seller.payment_qr.clone(),
            },
            table,
            totals: TotalsBlock {
                subtotal: total.clone(),
                total,
            },
            amount_in_words: WordsBlock {
                heading: WORDS_HEADING.to_string(),
                text: amount_in_words(order.total_amount),
            },
            footer: FOOTER.to_string(),
        }
    }

    fn item_table(&self, items: &[LineItem]) -> ItemTable {
        let mut seq = 0;
        let sections = self
            .categories
            .group(items)
            .into_iter()
            .map(|group| TableSection {
                category: group.category.to_string(),
                rows: group
                    .items
                    .into_iter()
                    .map(|item| {
                        seq += 1;
                        table_row(seq, item)
                    })
                    .collect(),
            })
            .collect();

        ItemTable {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            sections,
        }
    }
}

fn table_row(seq: usize, item: &LineItem) -> TableRow {
    TableRow {
        seq,
        item_name: truncate_name(item.product_name()),
        hsn_sac: NO_HSN_SAC.to_string(),
        quantity: item.quantity(),
        unit_price: item.unit_price().to_string(),
        line_total: item.line_total().to_string(),
    }
}

/// Cut `name` to [`NAME_LIMIT`] characters plus [`ELLIPSIS`].
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_name(name: &str) -> String {
    match name.char_indices().nth(NAME_LIMIT) {
        Some((cut, _)) => format!("{}{}", &name[..cut], ELLIPSIS),
        None => name.to_string(),
    }
}

/// Assemble with the built-in seller profile and category list.
pub fn assemble(order: &Order) -> InvoicePlan {
    InvoiceAssembler::default().assemble(order)
}
