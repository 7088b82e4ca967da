//! Integration tests for the shipped fixture sets.
//!
//! The `market` set is a weekly shop with deposit cans riding along as
//! bundle components and two carrier bags; the `bare` set has no special
//! categories and a deliberately mis-shaped settings file.
//!
//! Expected `market` summary:
//!
//! - Merchandise: milk x2 + bread x1 + cola six-pack x1 + water x4 = 8 units
//! - Deposit: 6 cans at 0.50 RON = 3.00 RON
//! - Bags: 2 bags at 0.45 RON = 0.90 RON
//! - Subtotal: 57.90 RON less 3.90 RON of special value = 54.00 RON
//! - Taxes: VAT 9.50 RON + eco 1.20 RON, consolidated to 10.70 RON
//! - Grand total (platform): 80.60 RON

use std::fs;

use rusty_money::{Money, iso::RON};
use testresult::TestResult;

use till::{fixtures::Fixture, prelude::*};

#[test]
fn market_set_summarises_end_to_end() -> TestResult {
    let fixture = Fixture::from_set("market")?;
    let order = fixture.order()?;
    let categories = fixture.category_sets();

    let summary = summarize(
        &order,
        &categories,
        &ConsolidatingTaxSplitter,
        &StaticLabels::new(),
    )?;

    assert_eq!(summary.merchandise_count(), 8);

    let shown: Vec<&str> = summary
        .display_entries()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(shown, vec![ITEMS_ID, "Shipping", SGR_ID, TAX_ID, BAGS_ID]);

    let items_entry = summary
        .entries()
        .iter()
        .find(|entry| entry.id == ITEMS_ID)
        .expect("expected a merchandise subtotal entry");
    assert_eq!(items_entry.value, Money::from_minor(5400, RON));

    let sgr_entry = summary
        .entries()
        .iter()
        .find(|entry| entry.id == SGR_ID)
        .expect("expected a deposit entry");
    assert_eq!(sgr_entry.value, Money::from_minor(300, RON));

    let bags_entry = summary
        .entries()
        .iter()
        .find(|entry| entry.id == BAGS_ID)
        .expect("expected a bags entry");
    assert_eq!(bags_entry.value, Money::from_minor(90, RON));

    assert_eq!(summary.taxes().len(), 2);
    assert_eq!(order.grand_total(), Money::from_minor(8060, RON));

    Ok(())
}

#[test]
fn market_set_zero_discounts_are_suppressed() -> TestResult {
    let fixture = Fixture::from_set("market")?;
    let order = fixture.order()?;

    let summary = summarize(
        &order,
        &fixture.category_sets(),
        &ConsolidatingTaxSplitter,
        &StaticLabels::new(),
    )?;

    assert!(
        summary.entries().iter().any(|entry| entry.id == "Discounts"),
        "zero entries stay in the aggregated list"
    );
    assert!(
        summary.display_entries().all(|entry| entry.id != "Discounts"),
        "zero entries never reach the display list"
    );

    Ok(())
}

#[test]
fn bare_set_degrades_to_no_categories() -> TestResult {
    let fixture = Fixture::from_set("bare")?;

    // The settings file exists but is mis-shaped.
    assert!(!fixture.settings().is_available());
    assert!(fixture.category_sets().is_empty());

    let order = fixture.order()?;
    let summary = summarize(
        &order,
        &fixture.category_sets(),
        &ConsolidatingTaxSplitter,
        &StaticLabels::new(),
    )?;

    assert_eq!(summary.merchandise_count(), 3);

    let shown: Vec<&str> = summary
        .display_entries()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(shown, vec![ITEMS_ID, TAX_ID]);

    // No special categories recognised, so the platform totals are intact.
    assert_eq!(summary.entries(), order.platform_totals());

    Ok(())
}

#[test]
fn custom_base_path_round_trips() -> TestResult {
    let dir = tempfile::tempdir()?;

    fs::create_dir_all(dir.path().join("orders"))?;
    fs::create_dir_all(dir.path().join("settings"))?;

    fs::write(
        dir.path().join("orders").join("custom.yml"),
        r#"
currency: GBP
total: "6.40 GBP"
items:
  - id: apples
    quantity: 4
    price: "1.10 GBP"
  - id: bag
    quantity: 1
    price: "0.30 GBP"
totals:
  - id: Items
    name: Subtotal
    value: "4.70 GBP"
  - id: Tax
    name: Tax
    value: "0.94 GBP"
"#,
    )?;

    fs::write(
        dir.path().join("settings").join("custom.json"),
        r#"{ "bagsSettings": { "standard": "bag" } }"#,
    )?;

    let mut fixture = Fixture::with_base_path(dir.path());
    fixture.load_order("custom")?.load_settings("custom")?;

    let order = fixture.order()?;
    let summary = summarize(
        &order,
        &fixture.category_sets(),
        &ConsolidatingTaxSplitter,
        &StaticLabels::new(),
    )?;

    assert_eq!(summary.merchandise_count(), 4);

    let shown: Vec<&str> = summary
        .display_entries()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(shown, vec![ITEMS_ID, TAX_ID, BAGS_ID]);

    Ok(())
}

#[test]
fn missing_order_fixture_is_an_error() {
    let mut fixture = Fixture::new();

    assert!(fixture.load_order("does-not-exist").is_err());
}

#[test]
fn snapshot_before_loading_an_order_is_an_error() {
    let fixture = Fixture::new();

    assert!(fixture.order().is_err());
}
