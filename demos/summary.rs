//! Order Summary Demo
//!
//! Loads an order fixture set, resolves the bag/deposit category settings,
//! and prints the cart followed by the summary receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `--no-settings` to simulate a failed settings fetch

use std::io;

use anyhow::Result;
use clap::Parser;

use till::{
    categories::CategorySets,
    fixtures::Fixture,
    items::bags_last,
    labels::StaticLabels,
    receipt::Receipt,
    summary::summarize,
    taxes::ConsolidatingTaxSplitter,
    utils::DemoArgs,
};

/// Order Summary Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    let categories = if args.no_settings {
        CategorySets::empty()
    } else {
        fixture.category_sets()
    };

    let order = fixture.order()?;

    let summary = summarize(
        &order,
        &categories,
        &ConsolidatingTaxSplitter,
        &StaticLabels::new(),
    )?;

    println!("Cart ({} lines):", order.len());

    for item in bags_last(order.items(), &categories) {
        println!("  {:<16} x{:<3} {}", item.id(), item.quantity(), item.price());
    }

    println!();

    let stdout = io::stdout();
    let handle = stdout.lock();

    Receipt::new(&summary, order.grand_total()).write_to(handle)?;

    Ok(())
}
