//! Receipt
//!
//! Terminal rendering of an order summary: one row per displayable total,
//! itemised taxes under the tax row, and the platform grand total as a
//! bold footer. Zero-valued entries are suppressed here, at render time.

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    summary::OrderSummary,
    totals::{ITEMS_ID, TAX_ID},
};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Terminal renderer for an [`OrderSummary`].
#[derive(Debug)]
pub struct Receipt<'a, 'b> {
    summary: &'a OrderSummary<'b>,
    grand_total: Money<'b, Currency>,
}

impl<'a, 'b> Receipt<'a, 'b> {
    /// Create a receipt over a summary and the platform grand total.
    #[must_use]
    pub fn new(summary: &'a OrderSummary<'b>, grand_total: Money<'b, Currency>) -> Self {
        Self {
            summary,
            grand_total,
        }
    }

    /// Write the receipt table.
    ///
    /// The merchandise subtotal row carries the unit count, and the grand
    /// total closes the table below a separator.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the table cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();
        let mut row_count = 0usize;
        let mut dim_rows: SmallVec<[usize; 8]> = smallvec![];

        for entry in self.summary.display_entries() {
            let label = if entry.id == ITEMS_ID {
                format!("{} ({})", entry.name, self.summary.merchandise_count())
            } else {
                entry.name.clone()
            };

            builder.push_record([label, format!("{}", entry.value)]);
            row_count += 1;

            if entry.id == TAX_ID {
                for tax in self.summary.taxes() {
                    builder.push_record([format!("  {}", tax.name), format!("{}", tax.value)]);
                    dim_rows.push(row_count);
                    row_count += 1;
                }
            }
        }

        builder.push_record(["Total".to_string(), format!("{}", self.grand_total)]);

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(row_count, separator);

        table.with(theme);
        table.modify(Rows::last(), Color::BOLD);
        table.modify(Columns::last(), Alignment::right());

        for row in dim_rows {
            table.modify((row, 0), Color::FG_BRIGHT_BLACK);
        }

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::RON;
    use testresult::TestResult;

    use crate::{
        categories::CategorySets,
        items::LineItem,
        labels::StaticLabels,
        order::Order,
        summary::summarize,
        taxes::ConsolidatingTaxSplitter,
        totals::TotalEntry,
    };

    use super::*;

    fn rendered() -> TestResult<String> {
        let items = [
            LineItem::new("milk-1l", 2, Money::from_minor(750, RON)),
            LineItem::new("bag-1", 1, Money::from_minor(45, RON)),
        ];

        let totals = [
            TotalEntry::new(ITEMS_ID, "Subtotal", Money::from_minor(1545, RON)),
            TotalEntry::new("Discounts", "Discounts", Money::from_minor(0, RON)),
            TotalEntry::new("Tax:VAT", "VAT 19%", Money::from_minor(285, RON)),
            TotalEntry::new("Tax:ECO", "Eco tax", Money::from_minor(10, RON)),
        ];

        let order = Order::new(items, totals, Money::from_minor(1840, RON), RON)?;
        let categories = CategorySets::new(["bag-1".to_string()], []);

        let summary = summarize(
            &order,
            &categories,
            &ConsolidatingTaxSplitter,
            &StaticLabels::new(),
        )?;

        let mut buffer = Vec::new();
        Receipt::new(&summary, order.grand_total()).write_to(&mut buffer)?;

        Ok(String::from_utf8(buffer)?)
    }

    #[test]
    fn renders_count_taxes_and_footer() -> TestResult {
        let output = rendered()?;

        assert!(output.contains("Subtotal (2)"), "count suffix missing:\n{output}");
        assert!(output.contains("VAT 19%"), "tax breakdown missing:\n{output}");
        assert!(output.contains("Eco tax"), "tax breakdown missing:\n{output}");
        assert!(output.contains("Carrier bags"), "bag entry missing:\n{output}");
        assert!(output.contains("Total"), "footer missing:\n{output}");

        Ok(())
    }

    #[test]
    fn suppresses_zero_valued_entries() -> TestResult {
        let output = rendered()?;

        assert!(
            !output.contains("Discounts"),
            "zero entry should be suppressed:\n{output}"
        );

        Ok(())
    }
}
