use serde::{Deserialize, Serialize};

/// One inventory entry.
///
/// `name` is fixed at construction and decides the item's category. Only the
/// update policies in [`crate::policy`] move `sell_in` and `quality`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    /// Values are taken as given; out-of-range quality is clamped on the next
    /// update, not here.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left until the sell-by date. Negative once the date has passed.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
