//! Line Items

use rusty_money::{Money, iso::Currency};

use crate::categories::CategorySets;

/// A single cart line as supplied by the order data provider.
///
/// The identifier is not unique across quantity, but is unique per
/// distinct SKU/bundle position.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    id: String,
    quantity: u32,
    price: Money<'a, Currency>,
    parent_id: Option<String>,
}

impl<'a> LineItem<'a> {
    /// Creates a new top-level line item.
    #[must_use]
    pub fn new(id: impl Into<String>, quantity: u32, price: Money<'a, Currency>) -> Self {
        Self::with_parent(id, quantity, price, None)
    }

    /// Creates a line item that is a component of a parent bundle.
    #[must_use]
    pub fn component_of(
        id: impl Into<String>,
        quantity: u32,
        price: Money<'a, Currency>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self::with_parent(id, quantity, price, Some(parent_id.into()))
    }

    fn with_parent(
        id: impl Into<String>,
        quantity: u32,
        price: Money<'a, Currency>,
        parent_id: Option<String>,
    ) -> Self {
        // Upstream validates the feed; a negative unit price here is a bug there.
        debug_assert!(
            price.to_minor_units() >= 0,
            "line item unit price must be non-negative"
        );

        Self {
            id: id.into(),
            quantity,
            price,
            parent_id,
        }
    }

    /// Returns the SKU identifier of the line.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the unit quantity of the line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price of the line.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the identifier of the parent bundle, if any.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Whether the line is a top-level entry rather than a bundle component.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Price of the whole line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money<'a, Currency> {
        let minor = self.price.to_minor_units() * i64::from(self.quantity);

        Money::from_minor(minor, self.price.currency())
    }
}

/// Reorders a cart for display so carrier bags come last.
///
/// Stable partition: non-bag lines first, bag lines after, each group in
/// its original relative order. The input sequence is left untouched.
#[must_use]
pub fn bags_last<'a>(items: &[LineItem<'a>], categories: &CategorySets) -> Vec<LineItem<'a>> {
    let (bags, mut ordered): (Vec<_>, Vec<_>) = items
        .iter()
        .cloned()
        .partition(|item| categories.is_bag(item.id()));

    ordered.extend(bags);
    ordered
}
