//! Batch driver: advance a whole inventory by one day.

use crate::item::Item;
use crate::policy::Category;

/// Age every item by one day, in order, each by its own category's rule.
pub fn advance_one_day(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "advancing inventory by one day");

    for item in items.iter_mut() {
        let category = Category::resolve(item.name());
        category.apply_one_day(item);

        tracing::trace!(
            name = item.name(),
            category = category.label(),
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item updated"
        );
    }
}

/// The shop: owns its inventory and ages it one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
    }
}
