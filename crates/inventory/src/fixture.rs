//! Item lists: the built-in sample and JSON fixtures.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;

/// One item per category.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Aged Brie", 2, 0),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Normal Item", 10, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Decode a JSON array of `{ "name", "sell_in", "quality" }` objects.
///
/// Values are not range-checked; only the document shape is.
pub fn parse_items(json: &str) -> DomainResult<Vec<Item>> {
    serde_json::from_str(json).map_err(|e| DomainError::decode(format!("item list: {e}")))
}
