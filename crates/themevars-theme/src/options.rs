//! Theme and variant configuration types.

use crate::categories::CategoryTable;
use crate::colors::ColorFormat;
use serde::{Deserialize, Serialize};

/// Selector the base theme's variables are registered under by default.
pub const DEFAULT_SELECTOR: &str = ":root";

/// Options for building a [`Theme`](crate::Theme).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Prepended (with `-`) to every generated variable name.
    pub prefix: Option<String>,
    /// Selector for the base variables.
    pub selector: String,
    /// Component encoding for color categories.
    pub color_format: ColorFormat,
    /// Category naming and conversion table.
    pub categories: CategoryTable,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            selector: DEFAULT_SELECTOR.into(),
            color_format: ColorFormat::default(),
            categories: CategoryTable::builtin(),
        }
    }
}

impl ThemeOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_color_format(mut self, format: ColorFormat) -> Self {
        self.color_format = format;
        self
    }

    pub fn with_categories(mut self, categories: CategoryTable) -> Self {
        self.categories = categories;
        self
    }

    /// The configured user prefix, treating an empty string as unset.
    pub fn user_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }
}

/// Where a variant's variables are registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOptions {
    /// Selector to register under. Inside `media_query`, defaults to the
    /// theme's selector.
    pub selector: Option<String>,
    /// At-rule to nest under, e.g. `@media (prefers-color-scheme: dark)`.
    pub media_query: Option<String>,
}

impl VariantOptions {
    pub fn selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            media_query: None,
        }
    }

    pub fn media_query(media_query: impl Into<String>) -> Self {
        Self {
            selector: None,
            media_query: Some(media_query.into()),
        }
    }
}
