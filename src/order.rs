//! Orders

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{items::LineItem, totals::TotalEntry};

/// Errors related to order snapshot construction.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A line item's currency differs from the order currency
    /// (index, item currency, order currency).
    #[error("Line item {0} has currency {1}, but order has currency {2}")]
    ItemCurrencyMismatch(usize, &'static str, &'static str),

    /// A platform total's currency differs from the order currency
    /// (entry id, entry currency, order currency).
    #[error("Total entry {0} has currency {1}, but order has currency {2}")]
    TotalCurrencyMismatch(String, &'static str, &'static str),

    /// The grand total currency differs from the order currency.
    #[error("Grand total has currency {0}, but order has currency {1}")]
    GrandTotalCurrencyMismatch(&'static str, &'static str),
}

/// An immutable snapshot of a checkout order as supplied by the platform.
///
/// Holds the cart lines, the platform's authoritative totals list, and the
/// platform-supplied grand total. The grand total is never recomputed
/// here; subtotal adjustments leave it untouched.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    items: Vec<LineItem<'a>>,
    totals: Vec<TotalEntry<'a>>,
    grand_total: Money<'a, Currency>,
    currency: &'static Currency,
}

impl<'a> Order<'a> {
    /// Create a new order snapshot.
    ///
    /// # Errors
    ///
    /// Returns an `OrderError` if any line item, total entry, or the grand
    /// total uses a currency other than `currency`.
    pub fn new(
        items: impl Into<Vec<LineItem<'a>>>,
        totals: impl Into<Vec<TotalEntry<'a>>>,
        grand_total: Money<'a, Currency>,
        currency: &'static Currency,
    ) -> Result<Self, OrderError> {
        let items = items.into();
        let totals = totals.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            let item_currency = item.price().currency();

            if item_currency == currency {
                Ok(())
            } else {
                Err(OrderError::ItemCurrencyMismatch(
                    i,
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        totals.iter().try_for_each(|entry| {
            let entry_currency = entry.value.currency();

            if entry_currency == currency {
                Ok(())
            } else {
                Err(OrderError::TotalCurrencyMismatch(
                    entry.id.clone(),
                    entry_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        if grand_total.currency() != currency {
            return Err(OrderError::GrandTotalCurrencyMismatch(
                grand_total.currency().iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        Ok(Order {
            items,
            totals,
            grand_total,
            currency,
        })
    }

    /// The cart lines.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// The platform's totals list.
    pub fn platform_totals(&self) -> &[TotalEntry<'a>] {
        &self.totals
    }

    /// The platform-supplied order value (the receipt footer).
    #[must_use]
    pub fn grand_total(&self) -> Money<'a, Currency> {
        self.grand_total
    }

    /// The order currency.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of cart lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
