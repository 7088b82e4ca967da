//! Tax Splitting
//!
//! The platform may deliver tax as a single blended entry or as several
//! itemised lines. Before display the summariser hands the totals list to
//! a splitter, which returns the list with taxes consolidated into one
//! `"Tax"` entry plus the itemised breakdown shown alongside it.

use rusty_money::MoneyError;
use smallvec::SmallVec;

use crate::totals::{TAX_ID, TaxEntry, TotalEntry};

/// Itemised tax lines; orders rarely carry more than a few.
pub type TaxBreakdown<'a> = SmallVec<[TaxEntry<'a>; 4]>;

/// Separates tax lines out of a totals list for display.
pub trait TaxSplitter {
    /// Splits the list into display totals and an itemised tax breakdown.
    ///
    /// The relative order of non-tax entries must be preserved.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if consolidating tax amounts fails (for
    /// example, due to a currency mismatch between tax lines).
    fn split<'a>(
        &self,
        entries: &[TotalEntry<'a>],
    ) -> Result<(Vec<TotalEntry<'a>>, TaxBreakdown<'a>), MoneyError>;
}

/// Default splitter.
///
/// Entries whose id is `"Tax"` or starts with `"Tax:"` count as tax lines.
/// More than one tax line (or a single prefixed one) is consolidated into
/// one `"Tax"` entry at the position of the first, with the original lines
/// reported as the itemised breakdown. A single plain `"Tax"` line passes
/// through untouched with no breakdown, as does a list without tax lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolidatingTaxSplitter;

fn is_tax_entry(entry: &TotalEntry<'_>) -> bool {
    entry.id == TAX_ID || entry.id.starts_with("Tax:")
}

impl TaxSplitter for ConsolidatingTaxSplitter {
    fn split<'a>(
        &self,
        entries: &[TotalEntry<'a>],
    ) -> Result<(Vec<TotalEntry<'a>>, TaxBreakdown<'a>), MoneyError> {
        let tax_lines: SmallVec<[&TotalEntry<'a>; 4]> =
            entries.iter().filter(|entry| is_tax_entry(entry)).collect();

        let Some((first, rest)) = tax_lines.split_first() else {
            return Ok((entries.to_vec(), TaxBreakdown::new()));
        };

        if rest.is_empty() && first.id == TAX_ID {
            return Ok((entries.to_vec(), TaxBreakdown::new()));
        }

        let total = rest
            .iter()
            .try_fold(first.value, |acc, line| acc.add(line.value))?;

        // The breakdown keeps the original labels; the consolidated line is
        // labelled by its key, which display layers resolve themselves.
        let consolidated = TotalEntry::new(TAX_ID, TAX_ID, total);

        let mut split = Vec::with_capacity(entries.len());
        let mut replaced = false;

        for entry in entries {
            if is_tax_entry(entry) {
                if !replaced {
                    split.push(consolidated.clone());
                    replaced = true;
                }
            } else {
                split.push(entry.clone());
            }
        }

        let breakdown = tax_lines
            .iter()
            .map(|line| TaxEntry {
                id: line.id.clone(),
                name: line.name.clone(),
                value: line.value,
            })
            .collect();

        Ok((split, breakdown))
    }
}
