//! Order Summary
//!
//! The totals aggregation: classifies cart lines against the category
//! sets, peels bag and deposit value out of the merchandise subtotal, and
//! rebuilds the display list with a dedicated entry for each.

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    categories::{Category, CategorySets},
    items::LineItem,
    labels::{Localizer, MessageKey},
    order::Order,
    taxes::{TaxBreakdown, TaxSplitter},
    totals::{BAGS_ID, ITEMS_ID, SGR_ID, TAX_ID, TaxEntry, TotalEntry, insert_at},
};

/// Errors that can occur while building an order summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Display-ready breakdown of an order's totals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    entries: Vec<TotalEntry<'a>>,
    taxes: TaxBreakdown<'a>,
    merchandise_count: u64,
}

impl<'a> OrderSummary<'a> {
    /// The adjusted totals list, in display order.
    ///
    /// May contain zero-valued entries; use [`Self::display_entries`] for
    /// the on-screen list.
    pub fn entries(&self) -> &[TotalEntry<'a>] {
        &self.entries
    }

    /// Entries that should appear on screen: zero amounts skipped.
    pub fn display_entries(&self) -> impl Iterator<Item = &TotalEntry<'a>> {
        crate::totals::displayable(&self.entries)
    }

    /// The itemised tax breakdown, forwarded from the tax splitter.
    pub fn taxes(&self) -> &[TaxEntry<'a>] {
        &self.taxes
    }

    /// Units of top-level ordinary merchandise.
    ///
    /// Carrier bags, deposit containers and bundle components never count,
    /// even though their value remains part of the totals.
    #[must_use]
    pub fn merchandise_count(&self) -> u64 {
        self.merchandise_count
    }
}

/// Builds the order summary from a platform order snapshot.
///
/// Pure and synchronous: the same inputs always produce the same summary,
/// and the snapshot is never modified. Empty category sets are a valid
/// input and leave the platform totals unchanged.
///
/// # Errors
///
/// Returns a [`SummaryError`] if money arithmetic fails; with a
/// currency-validated [`Order`] this does not happen.
pub fn summarize<'a>(
    order: &Order<'a>,
    categories: &CategorySets,
    splitter: &impl TaxSplitter,
    labels: &impl Localizer,
) -> Result<OrderSummary<'a>, SummaryError> {
    let items = order.items();

    let merchandise_count: u64 = items
        .iter()
        .filter(|item| item.is_top_level())
        .filter(|item| categories.classify(item.id()) == Category::Merchandise)
        .map(|item| u64::from(item.quantity()))
        .sum();

    let bag_total = category_total(items, categories, Category::Bag)?;
    let deposit_total = category_total(items, categories, Category::Deposit)?;

    let adjusted = adjust_merchandise_subtotal(order.platform_totals(), bag_total, deposit_total)?;

    let (mut entries, taxes) = splitter.split(&adjusted)?;

    if let Some(deposit) = positive(deposit_total) {
        let entry = TotalEntry::new(SGR_ID, labels.localize(MessageKey::DepositFee), deposit);

        // Deposits sit just above the tax line. A tax line at index 0
        // counts as "not found" here, so the deposit entry then leads the
        // list and lands ahead of tax. Storefront display parity depends
        // on this exact placement; keep it.
        let insert_index = match entries.iter().position(|total| total.id == TAX_ID) {
            Some(index) if index > 0 => index,
            _ => 0,
        };

        entries = insert_at(&entries, insert_index, entry);
    }

    if let Some(bags) = positive(bag_total) {
        entries.push(TotalEntry::new(
            BAGS_ID,
            labels.localize(MessageKey::BagFee),
            bags,
        ));
    }

    Ok(OrderSummary {
        entries,
        taxes,
        merchandise_count,
    })
}

/// Sum of line totals over the items classified into `category`.
///
/// `None` when no line matched, so callers can tell "no such items" apart
/// from "matching items summing to zero".
fn category_total<'a>(
    items: &[LineItem<'a>],
    categories: &CategorySets,
    category: Category,
) -> Result<Option<Money<'a, Currency>>, MoneyError> {
    items
        .iter()
        .filter(|item| categories.classify(item.id()) == category)
        .try_fold(None, |acc: Option<Money<'a, Currency>>, item| {
            let line = item.line_total();

            Ok(Some(match acc {
                None => line,
                Some(total) => total.add(line)?,
            }))
        })
}

/// Subtracts the special-category value from the `"Items"` entry.
///
/// Without an `"Items"` entry there is nothing to adjust and the list
/// passes through unchanged.
fn adjust_merchandise_subtotal<'a>(
    totals: &[TotalEntry<'a>],
    bag_total: Option<Money<'a, Currency>>,
    deposit_total: Option<Money<'a, Currency>>,
) -> Result<Vec<TotalEntry<'a>>, MoneyError> {
    totals
        .iter()
        .map(|entry| {
            if entry.id != ITEMS_ID {
                return Ok(entry.clone());
            }

            let mut value = entry.value;

            if let Some(bags) = bag_total {
                value = value.sub(bags)?;
            }

            if let Some(deposit) = deposit_total {
                value = value.sub(deposit)?;
            }

            Ok(TotalEntry {
                value,
                ..entry.clone()
            })
        })
        .collect()
}

/// Filters a category total down to strictly positive amounts.
fn positive<'a>(total: Option<Money<'a, Currency>>) -> Option<Money<'a, Currency>> {
    total.filter(|money| money.to_minor_units() > 0)
}
