//! Labels
//!
//! Label resolution for the entries the summariser synthesises. The real
//! message catalogue lives in the storefront; this seam only supplies
//! display strings for the deposit and bag lines.

use rustc_hash::FxHashMap;

/// Message keys for labels synthesised by the summariser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Label for the deposit-return scheme entry.
    DepositFee,

    /// Label for the carrier bag entry.
    BagFee,
}

/// Resolves a message key to a display string.
pub trait Localizer {
    /// Returns the display string for the given key.
    fn localize(&self, key: MessageKey) -> String;
}

/// In-crate label catalogue with English defaults.
#[derive(Debug, Clone, Default)]
pub struct StaticLabels {
    overrides: FxHashMap<MessageKey, String>,
}

impl StaticLabels {
    /// Catalogue with only the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the label for a key.
    #[must_use]
    pub fn with_label(mut self, key: MessageKey, label: impl Into<String>) -> Self {
        self.overrides.insert(key, label.into());
        self
    }

    fn default_label(key: MessageKey) -> &'static str {
        match key {
            MessageKey::DepositFee => "Returnable container deposit",
            MessageKey::BagFee => "Carrier bags",
        }
    }
}

impl Localizer for StaticLabels {
    fn localize(&self, key: MessageKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Self::default_label(key).to_string())
    }
}
