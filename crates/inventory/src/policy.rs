//! Daily update rules, one per item category.

use crate::item::Item;

/// Lowest quality a non-legendary item can have after an update.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can have after an update.
pub const MAX_QUALITY: i32 = 50;

const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
const APPRECIATING_NAME: &str = "Aged Brie";
const EVENT_TICKET_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";
const FAST_DECAYING_NAME: &str = "Conjured Mana Cake";

/// Behavioral class of an item, decided by its exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never sold, never ages. Quality is exempt from the clamp.
    Legendary,
    /// Gains quality with age, twice as fast once expired.
    Appreciating,
    /// Gains quality faster as the event nears, worthless afterwards.
    EventTicket,
    /// Degrades twice as fast as a normal item.
    FastDecaying,
    /// Anything without a dedicated rule.
    Normal,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Legendary,
        Category::Appreciating,
        Category::EventTicket,
        Category::FastDecaying,
        Category::Normal,
    ];

    /// Exact, case-sensitive lookup. Unknown names are `Normal`.
    pub fn resolve(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Category::Legendary,
            APPRECIATING_NAME => Category::Appreciating,
            EVENT_TICKET_NAME => Category::EventTicket,
            FAST_DECAYING_NAME => Category::FastDecaying,
            _ => Category::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::Appreciating => "appreciating",
            Category::EventTicket => "event_ticket",
            Category::FastDecaying => "fast_decaying",
            Category::Normal => "normal",
        }
    }

    /// Age `item` by one day.
    ///
    /// `sell_in` is decremented first; every quality rule looks at the
    /// decremented value. `sell_in` stops at `i32::MIN` rather than wrapping.
    pub fn apply_one_day(self, item: &mut Item) {
        if self == Category::Legendary {
            return;
        }

        item.sell_in = item.sell_in.saturating_sub(1);
        item.quality = clamp_quality(self.next_quality(item.sell_in, item.quality));
    }

    /// Unclamped quality for the day, given the already-decremented `sell_in`.
    fn next_quality(self, sell_in: i32, quality: i32) -> i32 {
        let expired = sell_in < 0;
        match self {
            Category::Legendary => quality,
            Category::Appreciating => quality.saturating_add(if expired { 2 } else { 1 }),
            Category::EventTicket => match sell_in {
                s if s < 0 => 0,
                s if s < 5 => quality.saturating_add(3),
                s if s < 10 => quality.saturating_add(2),
                _ => quality.saturating_add(1),
            },
            Category::FastDecaying => quality.saturating_sub(if expired { 4 } else { 2 }),
            Category::Normal => quality.saturating_sub(if expired { 2 } else { 1 }),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
