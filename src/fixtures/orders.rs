//! Order Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, RON, USD};
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Wrapper for an order in YAML
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// ISO currency code shared by every amount in the set
    pub currency: String,

    /// Platform-supplied order value (e.g., "80.60 RON")
    pub total: String,

    /// Cart lines
    pub items: Vec<ItemFixture>,

    /// Platform totals list
    pub totals: Vec<TotalFixture>,
}

/// A cart line in YAML
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// SKU identifier
    pub id: String,

    /// Unit quantity
    pub quantity: u32,

    /// Unit price (e.g., "7.50 RON")
    pub price: String,

    /// Parent bundle id, when the line is a component
    #[serde(default)]
    pub parent: Option<String>,
}

/// A platform total in YAML
#[derive(Debug, Deserialize)]
pub struct TotalFixture {
    /// Category key
    pub id: String,

    /// Display label
    pub name: String,

    /// Amount (e.g., "12.00 RON")
    pub value: String,
}

/// Parse a price string (e.g., "7.50 RON") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognised.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = parse_currency(currency_code)?;

    Ok((minor_units, currency))
}

/// Look up a supported ISO currency code
///
/// # Errors
///
/// Returns an error if the code is not one of the supported currencies.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "EUR" => Ok(EUR),
        "GBP" => Ok(GBP),
        "RON" => Ok(RON),
        "USD" => Ok(USD),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}
