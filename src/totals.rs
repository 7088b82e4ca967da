//! Totals
//!
//! Named total lines as supplied by the order platform and as synthesised
//! by the summariser, plus the pure list operations used on them.

use rusty_money::{Money, iso::Currency};

/// Category key of the merchandise subtotal entry.
pub const ITEMS_ID: &str = "Items";

/// Category key of the consolidated tax entry.
pub const TAX_ID: &str = "Tax";

/// Category key assigned to the synthesised deposit-return entry.
pub const SGR_ID: &str = "SGR";

/// Category key assigned to the synthesised carrier bag entry.
pub const BAGS_ID: &str = "Bags";

/// A named total line in the order summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalEntry<'a> {
    /// Category key; platform-assigned, or one of the keys synthesised here.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Amount in the order currency.
    pub value: Money<'a, Currency>,
}

impl<'a> TotalEntry<'a> {
    /// Creates a new total entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
        }
    }

    /// Whether the entry amount is zero.
    ///
    /// Zero entries are legitimate in an aggregated list; they are skipped
    /// at render time, not during aggregation.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.to_minor_units() == 0
    }
}

/// One itemised tax line, forwarded untouched for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxEntry<'a> {
    /// Tax line key.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Amount in the order currency.
    pub value: Money<'a, Currency>,
}

/// Returns a new list with `entry` inserted before the element at `index`.
///
/// An `index` at or past the end appends. The input list is not modified.
#[must_use]
pub fn insert_at<'a>(
    entries: &[TotalEntry<'a>],
    index: usize,
    entry: TotalEntry<'a>,
) -> Vec<TotalEntry<'a>> {
    let index = index.min(entries.len());
    let mut inserted = Vec::with_capacity(entries.len() + 1);

    inserted.extend(entries.iter().take(index).cloned());
    inserted.push(entry);
    inserted.extend(entries.iter().skip(index).cloned());

    inserted
}

/// Iterates the entries that should appear on screen: zero amounts skipped.
pub fn displayable<'s, 'a>(
    entries: &'s [TotalEntry<'a>],
) -> impl Iterator<Item = &'s TotalEntry<'a>> {
    entries.iter().filter(|entry| !entry.is_zero())
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::RON;

    use super::*;

    fn entries<'a>() -> Vec<TotalEntry<'a>> {
        vec![
            TotalEntry::new(ITEMS_ID, "Subtotal", Money::from_minor(5400, RON)),
            TotalEntry::new("Shipping", "Shipping", Money::from_minor(1200, RON)),
            TotalEntry::new(TAX_ID, "Tax", Money::from_minor(1070, RON)),
        ]
    }

    #[test]
    fn insert_at_front() {
        let entry = TotalEntry::new(SGR_ID, "Deposit", Money::from_minor(300, RON));

        let inserted = insert_at(&entries(), 0, entry);
        let ids: Vec<&str> = inserted.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec![SGR_ID, ITEMS_ID, "Shipping", TAX_ID]);
    }

    #[test]
    fn insert_at_middle() {
        let entry = TotalEntry::new(SGR_ID, "Deposit", Money::from_minor(300, RON));

        let inserted = insert_at(&entries(), 2, entry);
        let ids: Vec<&str> = inserted.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec![ITEMS_ID, "Shipping", SGR_ID, TAX_ID]);
    }

    #[test]
    fn insert_at_past_the_end_appends() {
        let entry = TotalEntry::new(BAGS_ID, "Bags", Money::from_minor(90, RON));

        let inserted = insert_at(&entries(), 99, entry);

        assert_eq!(inserted.last().map(|e| e.id.as_str()), Some(BAGS_ID));
        assert_eq!(inserted.len(), 4);
    }

    #[test]
    fn insert_at_leaves_the_input_untouched() {
        let before = entries();
        let entry = TotalEntry::new(SGR_ID, "Deposit", Money::from_minor(300, RON));

        let _ = insert_at(&before, 1, entry);

        assert_eq!(before.len(), 3);
    }

    #[test]
    fn is_zero() {
        let zero = TotalEntry::new("Discounts", "Discounts", Money::from_minor(0, RON));
        let nonzero = TotalEntry::new(ITEMS_ID, "Subtotal", Money::from_minor(1, RON));

        assert!(zero.is_zero());
        assert!(!nonzero.is_zero());
    }

    #[test]
    fn displayable_skips_zero_entries() {
        let mut all = entries();
        all.push(TotalEntry::new(
            "Discounts",
            "Discounts",
            Money::from_minor(0, RON),
        ));

        let shown: Vec<&str> = displayable(&all).map(|e| e.id.as_str()).collect();

        assert_eq!(shown, vec![ITEMS_ID, "Shipping", TAX_ID]);
    }
}
