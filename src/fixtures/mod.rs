//! Fixtures
//!
//! File-backed fixture sets for demos and integration tests: orders as
//! YAML (cart lines, platform totals, grand total) and settings payloads
//! as raw JSON, the format the settings endpoint serves.

use std::{fs, path::PathBuf};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    categories::CategorySets,
    items::LineItem,
    order::{Order, OrderError},
    settings::Settings,
    totals::TotalEntry,
};

pub mod orders;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// No order loaded
    #[error("No order loaded; cannot build a snapshot")]
    NoOrder,

    /// Order snapshot creation error
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded cart lines
    items: Vec<LineItem<'static>>,

    /// Loaded platform totals
    totals: Vec<TotalEntry<'static>>,

    /// Platform-supplied order value
    grand_total: Option<Money<'static, Currency>>,

    /// Currency declared by the order fixture
    currency: Option<&'static Currency>,

    /// Loaded settings payload, if any
    settings: Settings,
}

impl Fixture {
    /// Create a new empty fixture with the default base path
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            items: Vec::new(),
            totals: Vec::new(),
            grand_total: None,
            currency: None,
            settings: Settings::Unavailable,
        }
    }

    /// Load an order from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// price uses an unsupported format or currency code.
    pub fn load_order(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: orders::OrderFixture = serde_norway::from_str(&contents)?;

        let currency = orders::parse_currency(&fixture.currency)?;

        let mut items = Vec::with_capacity(fixture.items.len());

        for line in fixture.items {
            let (minor, item_currency) = orders::parse_price(&line.price)?;
            let price = Money::from_minor(minor, item_currency);

            let item = match line.parent {
                Some(parent) => LineItem::component_of(line.id, line.quantity, price, parent),
                None => LineItem::new(line.id, line.quantity, price),
            };

            items.push(item);
        }

        let mut totals = Vec::with_capacity(fixture.totals.len());

        for entry in fixture.totals {
            let (minor, entry_currency) = orders::parse_price(&entry.value)?;

            totals.push(TotalEntry::new(
                entry.id,
                entry.name,
                Money::from_minor(minor, entry_currency),
            ));
        }

        let (total_minor, total_currency) = orders::parse_price(&fixture.total)?;

        self.items = items;
        self.totals = totals;
        self.grand_total = Some(Money::from_minor(total_minor, total_currency));
        self.currency = Some(currency);

        Ok(self)
    }

    /// Load a settings payload from a JSON fixture file
    ///
    /// A missing file is an error; malformed content is not, it degrades
    /// to [`Settings::Unavailable`] exactly as a bad endpoint response does.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_settings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("settings").join(format!("{name}.json"));
        let contents = fs::read_to_string(&file_path)?;

        self.settings = Settings::from_json(&contents);

        Ok(self)
    }

    /// Load a complete fixture set (order and settings with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if either fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_order(name)?.load_settings(name)?;

        Ok(fixture)
    }

    /// The loaded cart lines.
    pub fn items(&self) -> &[LineItem<'static>] {
        &self.items
    }

    /// The loaded platform totals.
    pub fn platform_totals(&self) -> &[TotalEntry<'static>] {
        &self.totals
    }

    /// The loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Category sets resolved from the loaded settings.
    #[must_use]
    pub fn category_sets(&self) -> CategorySets {
        CategorySets::resolve(&self.settings)
    }

    /// Build an [`Order`] snapshot from the loaded order data.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoOrder`] if no order was loaded, or an
    /// order construction error if the fixture mixes currencies.
    pub fn order(&self) -> Result<Order<'static>, FixtureError> {
        let grand_total = self.grand_total.ok_or(FixtureError::NoOrder)?;
        let currency = self.currency.ok_or(FixtureError::NoOrder)?;

        Ok(Order::new(
            self.items.clone(),
            self.totals.clone(),
            grand_total,
            currency,
        )?)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
