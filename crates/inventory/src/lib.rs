//! Inventory domain module.
//!
//! Items age by one simulated day per call to [`advance_one_day`]. How an item
//! ages is decided by its [`Category`], which is resolved from the item name.
//! Everything here is deterministic domain logic (no IO beyond logging).

pub mod fixture;
pub mod item;
pub mod policy;
pub mod shop;

pub use fixture::{parse_items, sample_items};
pub use item::Item;
pub use policy::{Category, MAX_QUALITY, MIN_QUALITY};
pub use shop::{GildedRose, advance_one_day};
