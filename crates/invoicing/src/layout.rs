//! Page-overflow policy for the item table.
//!
//! A renderer does not do row arithmetic itself: [`render`] walks an
//! [`InvoicePlan`] and drives an [`InvoiceSink`] with a sequence of category
//! headings, rows and page-break requests decided by a [`PageLayout`].

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

use crate::plan::{InvoicePlan, ItemTable, TableRow};

/// Vertical layout of the item table, in page units.
///
/// Deserialization runs the same checks as [`PageLayout::new`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PageLayoutRecord")]
pub struct PageLayout {
    /// Offset of the first table line on page one (below header and column headings).
    pub first_page_offset: f32,
    /// Offset of the first table line on each continuation page.
    pub continuation_offset: f32,
    /// Height of a row or category heading.
    pub row_height: f32,
    /// A page break is requested once the running offset passes this value.
    pub break_threshold: f32,
}

impl PageLayout {
    pub fn new(
        first_page_offset: f32,
        continuation_offset: f32,
        row_height: f32,
        break_threshold: f32,
    ) -> DomainResult<Self> {
        if !(row_height > 0.0) {
            return Err(DomainError::validation("row height must be positive"));
        }
        if !(first_page_offset >= 0.0 && continuation_offset >= 0.0) {
            return Err(DomainError::validation("page offsets cannot be negative"));
        }
        if !(continuation_offset + row_height <= break_threshold) {
            return Err(DomainError::validation(
                "break threshold must leave room for at least one row per page",
            ));
        }
        Ok(Self {
            first_page_offset,
            continuation_offset,
            row_height,
            break_threshold,
        })
    }

    /// Lay out `table` as a flat event sequence.
    ///
    /// A page break is only emitted between two table lines, never after the last.
    pub fn paginate<'a>(&self, table: &'a ItemTable) -> Vec<TableEvent<'a>> {
        let mut events = Vec::with_capacity(table.row_count() + table.sections.len());
        let mut offset = self.first_page_offset;
        let mut pending_break = false;

        for section in &table.sections {
            if pending_break {
                events.push(TableEvent::PageBreak);
                offset = self.continuation_offset;
                pending_break = false;
            }
            events.push(TableEvent::Category(&section.category));
            offset += self.row_height;

            for row in &section.rows {
                if pending_break {
                    events.push(TableEvent::PageBreak);
                    offset = self.continuation_offset;
                    pending_break = false;
                }
                events.push(TableEvent::Row(row));
                offset += self.row_height;
                pending_break = offset > self.break_threshold;
            }
        }

        events
    }
}

impl Default for PageLayout {
    /// A4 portrait in millimetres, matching the printed invoice.
    fn default() -> Self {
        Self {
            first_page_offset: 115.0,
            continuation_offset: 20.0,
            row_height: 10.0,
            break_threshold: 250.0,
        }
    }
}

/// Wire shape of a [`PageLayout`].
#[derive(Debug, Clone, Copy, Deserialize)]
struct PageLayoutRecord {
    first_page_offset: f32,
    continuation_offset: f32,
    row_height: f32,
    break_threshold: f32,
}

impl TryFrom<PageLayoutRecord> for PageLayout {
    type Error = DomainError;

    fn try_from(r: PageLayoutRecord) -> Result<Self, Self::Error> {
        PageLayout::new(
            r.first_page_offset,
            r.continuation_offset,
            r.row_height,
            r.break_threshold,
        )
    }
}

/// One step of the item table walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent<'a> {
    Category(&'a str),
    Row(&'a TableRow),
    PageBreak,
}

/// A rendering backend (PDF, HTML, terminal, ...).
///
/// Methods are called in document order: `header`, then the table events, then
/// `summary` (totals, amount in words, footer).
pub trait InvoiceSink {
    type Error;

    fn header(&mut self, plan: &InvoicePlan) -> Result<(), Self::Error>;

    fn category(&mut self, name: &str) -> Result<(), Self::Error>;

    fn row(&mut self, row: &TableRow) -> Result<(), Self::Error>;

    fn new_page(&mut self) -> Result<(), Self::Error>;

    fn summary(&mut self, plan: &InvoicePlan) -> Result<(), Self::Error>;
}

/// Drive `sink` through `plan` using `layout` for page breaks.
pub fn render<S: InvoiceSink>(
    plan: &InvoicePlan,
    layout: &PageLayout,
    sink: &mut S,
) -> Result<(), S::Error> {
    sink.header(plan)?;

    for event in layout.paginate(&plan.table) {
        match event {
            TableEvent::Category(name) => sink.category(name)?,
            TableEvent::Row(row) => sink.row(row)?,
            TableEvent::PageBreak => sink.new_page()?,
        }
    }

    sink.summary(plan)
}
