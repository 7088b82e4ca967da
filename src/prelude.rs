//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    categories::{Category, CategorySets},
    items::{LineItem, bags_last},
    labels::{Localizer, MessageKey, StaticLabels},
    order::{Order, OrderError},
    receipt::{Receipt, ReceiptError},
    settings::{Settings, SettingsPayload},
    summary::{OrderSummary, SummaryError, summarize},
    taxes::{ConsolidatingTaxSplitter, TaxBreakdown, TaxSplitter},
    totals::{
        BAGS_ID, ITEMS_ID, SGR_ID, TAX_ID, TaxEntry, TotalEntry, displayable, insert_at,
    },
};
