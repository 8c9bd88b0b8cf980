//! Invoice formatting for the storefront.
//!
//! Turns a placed [`Order`] into a backend-agnostic [`InvoicePlan`] (header,
//! category-grouped item table, totals, amount in words), walks that plan page by
//! page for a renderer, and builds the owner's order notification. Everything
//! here is deterministic and performs no IO.

pub mod category;
pub mod layout;
pub mod notify;
pub mod numerals;
pub mod order;
pub mod placement;
pub mod plan;
pub mod seller;
pub mod text;

pub use category::{CategoryGroup, CategoryOrder, DEFAULT_CATEGORIES};
pub use layout::{InvoiceSink, PageLayout, TableEvent, render};
pub use notify::{NotificationConfig, OrderNotification, build_notification};
pub use numerals::{amount_in_words, number_to_words};
pub use order::{InvoiceNumber, LineItem, Order, OrderStatus};
pub use placement::{CustomerDetails, Field, FieldError, PlacementErrors, PlacementRules};
pub use plan::{InvoiceAssembler, InvoicePlan, TableRow, TableSection, assemble, truncate_name};
pub use seller::{ImageAsset, SellerProfile};
pub use text::{TextRenderer, render_text};
