//! Demonstration: age an inventory and print it.

mod config;

use std::io::Write;

use anyhow::Context;
use gildedrose_inventory::{GildedRose, Item, parse_items, sample_items};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = Config::from_env()?;
    let items = load_items(&config)?;

    run(&config, items, &mut std::io::stdout().lock())
}

/// Advance `config.days` days, writing the listing after each one.
///
/// A header precedes each day's listing only when more than one day is run.
fn run(config: &Config, items: Vec<Item>, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::info!(days = config.days, items = items.len(), "starting simulation");

    let mut shop = GildedRose::new(items);
    for day in 1..=config.days {
        shop.advance_one_day();

        if config.days > 1 {
            writeln!(out, "-------- day {day} --------")?;
        }
        for item in shop.items() {
            writeln!(out, "{item}")?;
        }
    }

    out.flush()?;
    Ok(())
}

fn load_items(config: &Config) -> anyhow::Result<Vec<Item>> {
    let Some(path) = &config.items_path else {
        return Ok(sample_items());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items = parse_items(&raw).with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(path = %path.display(), items = items.len(), "loaded item fixture");

    Ok(items)
}
