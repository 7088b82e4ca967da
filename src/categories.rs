//! Special SKU Categories
//!
//! Resolves the settings payload into the two identifier sets used to
//! classify cart lines, and classifies SKU identifiers against them.

use rustc_hash::FxHashSet;

use crate::settings::Settings;

/// The classification of a single cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A carrier bag, charged as a bag fee.
    Bag,

    /// A returnable container subject to a deposit surcharge.
    Deposit,

    /// Ordinary merchandise.
    Merchandise,
}

/// Resolved sets of special-category SKU identifiers.
///
/// Rebuilt from scratch on every settings fetch. An empty pair of sets is
/// the normal state before the fetch resolves, and classifies everything
/// as ordinary merchandise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySets {
    bag_ids: FxHashSet<String>,
    deposit_ids: FxHashSet<String>,
}

impl CategorySets {
    /// Two empty sets: nothing classifies as a bag or a deposit container.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build sets from explicit identifier lists.
    pub fn new(
        bag_ids: impl IntoIterator<Item = String>,
        deposit_ids: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            bag_ids: bag_ids.into_iter().collect(),
            deposit_ids: deposit_ids.into_iter().collect(),
        }
    }

    /// Resolve the category sets from fetched settings.
    ///
    /// The bag set takes the values of the bag variant mapping; the deposit
    /// set is the union of the three container SKU lists. `Unavailable`
    /// settings resolve to empty sets, so a failed or pending fetch
    /// temporarily classifies bag and deposit items as ordinary merchandise
    /// instead of blocking the summary.
    #[must_use]
    pub fn resolve(settings: &Settings) -> Self {
        match settings {
            Settings::Unavailable => Self::empty(),
            Settings::Available(payload) => {
                let bag_ids = payload.bags_settings.values().cloned().collect();

                let sgr = &payload.sgr_settings;
                let deposit_ids = sgr
                    .aluminum_can_products
                    .sku_ids
                    .iter()
                    .chain(&sgr.plastic_bottle_products.sku_ids)
                    .chain(&sgr.glass_bottle_products.sku_ids)
                    .cloned()
                    .collect();

                Self {
                    bag_ids,
                    deposit_ids,
                }
            }
        }
    }

    /// Classify a SKU identifier.
    ///
    /// Bag membership is tested first: if the settings data lists the same
    /// identifier as both bag and deposit, it counts as a bag. Keeping the
    /// sets disjoint is the settings author's responsibility.
    #[must_use]
    pub fn classify(&self, sku: &str) -> Category {
        if self.bag_ids.contains(sku) {
            Category::Bag
        } else if self.deposit_ids.contains(sku) {
            Category::Deposit
        } else {
            Category::Merchandise
        }
    }

    /// Whether the SKU identifies a carrier bag.
    #[must_use]
    pub fn is_bag(&self, sku: &str) -> bool {
        self.classify(sku) == Category::Bag
    }

    /// Whether the SKU identifies a deposit-bearing container.
    #[must_use]
    pub fn is_deposit(&self, sku: &str) -> bool {
        self.classify(sku) == Category::Deposit
    }

    /// Whether both sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bag_ids.is_empty() && self.deposit_ids.is_empty()
    }
}
