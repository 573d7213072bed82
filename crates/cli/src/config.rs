//! Runtime settings, read from the environment.

use std::path::PathBuf;

use gildedrose_core::{DomainError, DomainResult};

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const ITEMS_VAR: &str = "GILDED_ROSE_ITEMS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days to simulate; at least one.
    pub days: u32,
    /// JSON item list to load instead of the built-in sample.
    pub items_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: 1,
            items_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(DAYS_VAR)) {
            config.days = raw
                .parse::<u32>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or_else(|| {
                    DomainError::validation(format!(
                        "{DAYS_VAR} must be a positive integer (got {raw:?})"
                    ))
                })?;
        }

        config.items_path = non_blank(lookup(ITEMS_VAR)).map(PathBuf::from);

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
