//! Plain-text invoice backend.

use core::fmt::Write;

use crate::layout::{InvoiceSink, PageLayout, render};
use crate::plan::{InvoicePlan, TableRow};

/// Total line width.
const WIDTH: usize = 80;

/// Renders a plan as fixed-width text. Page breaks become a form feed followed
/// by a page marker line.
#[derive(Debug)]
pub struct TextRenderer {
    out: String,
    page: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            page: 1,
        }
    }

    pub fn pages(&self) -> usize {
        self.page
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn rule(&mut self, ch: char) -> core::fmt::Result {
        writeln!(self.out, "{}", ch.to_string().repeat(WIDTH))
    }

    fn table_line(&mut self, cols: [&str; 6]) -> core::fmt::Result {
        writeln!(
            self.out,
            "{:<6}{:<34}{:<9}{:>6}{:>12}{:>13}",
            cols[0], cols[1], cols[2], cols[3], cols[4], cols[5]
        )
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceSink for TextRenderer {
    type Error = core::fmt::Error;

    fn header(&mut self, plan: &InvoicePlan) -> core::fmt::Result {
        let seller = &plan.seller;
        writeln!(self.out, "{:^WIDTH$}", seller.name)?;
        for line in &seller.address_lines {
            writeln!(self.out, "{line:^WIDTH$}")?;
        }
        if let Some(phone) = &seller.phone_line {
            writeln!(self.out, "{phone:^WIDTH$}")?;
        }
        self.rule('=')?;

        let header = &plan.header;
        writeln!(self.out, "{}", header.title)?;
        writeln!(self.out, "Invoice No.: {}", header.invoice_number)?;
        writeln!(self.out, "Date: {}", header.date)?;
        writeln!(self.out, "Status: {}", header.status)?;
        writeln!(self.out)?;

        writeln!(self.out, "Bill To:")?;
        writeln!(self.out, "{}", plan.bill_to.name)?;
        writeln!(self.out, "{}", plan.bill_to.address)?;
        writeln!(self.out, "Phone: {}", plan.bill_to.phone)?;

        if let Some(upi) = &plan.payment.upi_id {
            writeln!(self.out, "UPI id: {upi}")?;
        }
        if let Some(qr) = &plan.payment.qr_code {
            writeln!(self.out, "[payment QR: {}]", qr.source)?;
        }
        writeln!(self.out)?;

        let c = &plan.table.columns;
        if c.len() == 6 {
            self.table_line([&c[0], &c[1], &c[2], &c[3], &c[4], &c[5]])?;
        }
        self.rule('-')
    }

    fn category(&mut self, name: &str) -> core::fmt::Result {
        writeln!(self.out, "      {name}")
    }

    fn row(&mut self, row: &TableRow) -> core::fmt::Result {
        let seq = row.seq.to_string();
        let qty = row.quantity.to_string();
        self.table_line([
            &seq,
            &row.item_name,
            &row.hsn_sac,
            &qty,
            &row.unit_price,
            &row.line_total,
        ])
    }

    fn new_page(&mut self) -> core::fmt::Result {
        self.page += 1;
        writeln!(self.out, "\u{c}")?;
        writeln!(self.out, "{:>WIDTH$}", format!("Page {}", self.page))
    }

    fn summary(&mut self, plan: &InvoicePlan) -> core::fmt::Result {
        self.rule('-')?;
        writeln!(self.out, "{:>67}{:>13}", "Subtotal", plan.totals.subtotal)?;
        writeln!(self.out, "{:>67}{:>13}", "Total", plan.totals.total)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", plan.amount_in_words.heading)?;
        writeln!(self.out, "{}", plan.amount_in_words.text)?;
        writeln!(self.out)?;
        writeln!(self.out, "{:^WIDTH$}", plan.footer)
    }
}

/// Render `plan` to text with the given page layout.
pub fn render_text(plan: &InvoicePlan, layout: &PageLayout) -> Result<String, core::fmt::Error> {
    let mut renderer = TextRenderer::new();
    render(plan, layout, &mut renderer)?;
    tracing::debug!(pages = renderer.pages(), "rendered text invoice");
    Ok(renderer.into_string())
}
