//! Category Settings
//!
//! Models the payload served by the cart settings endpoint, which declares
//! the SKU identifiers for carrier bags and returnable containers.

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Raw bag and deposit settings as served by the settings endpoint.
///
/// Every field defaults to empty, so a payload missing any sub-key still
/// deserializes; only a structurally different document fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPayload {
    /// Bag variant name -> SKU identifier.
    pub bags_settings: FxHashMap<String, String>,

    /// Deposit-return scheme product lists.
    pub sgr_settings: SgrSettings,
}

/// Deposit-return scheme settings: one SKU list per container material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SgrSettings {
    /// Aluminium can SKUs.
    pub aluminum_can_products: SkuList,

    /// Plastic bottle SKUs.
    pub plastic_bottle_products: SkuList,

    /// Glass bottle SKUs.
    pub glass_bottle_products: SkuList,
}

/// A list of SKU identifiers under a `skuIds` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkuList {
    /// The SKU identifiers.
    pub sku_ids: Vec<String>,
}

/// Outcome of the category settings fetch.
///
/// The fetch happens once per session, asynchronously and outside this
/// crate. Until it resolves, and whenever it fails or returns something
/// unparseable, the settings are `Unavailable`. Every consumer must treat
/// that as "no special categories recognised" rather than as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Settings {
    /// A payload was fetched and parsed.
    Available(SettingsPayload),

    /// No payload: fetch pending, failed, or malformed.
    #[default]
    Unavailable,
}

impl Settings {
    /// Parse a settings endpoint response body.
    ///
    /// Any deviation from the documented payload shape resolves to
    /// `Unavailable`; a bad settings response must never block the summary.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<SettingsPayload>(raw) {
            Ok(payload) => Settings::Available(payload),
            Err(_) => Settings::Unavailable,
        }
    }

    /// Whether a payload is present.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Settings::Available(_))
    }
}
