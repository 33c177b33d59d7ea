//! Category naming and conversion table.
//!
//! Maps a top-level theme category to its variable prefix and
//! [`PropertyKind`]. Categories missing from the table are not an error:
//! they get the kebab-cased category name as prefix and plain values.

use crate::property::PropertyKind;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use themevars_tokens::camel_to_kebab;

/// Naming and encoding policy for one category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySpec {
    /// Prefix override. `None` derives it from the category name; an
    /// empty string puts tokens directly under the user prefix.
    pub prefix: Option<String>,
    pub kind: PropertyKind,
}

impl CategorySpec {
    pub fn color(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
            kind: PropertyKind::Color,
        }
    }

    pub fn plain(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
            kind: PropertyKind::Plain,
        }
    }
}

/// Built-in color categories and their prefixes.
const BUILTIN_COLOR_CATEGORIES: &[(&str, &str)] = &[
    ("colors", ""),
    ("backgroundColor", "bg"),
    ("textColor", "text"),
    ("borderColor", "border"),
    ("accentColor", "accent"),
    ("ringColor", "ring"),
    ("caretColor", "caret"),
    ("divideColor", "divide"),
    ("outlineColor", "outline"),
    ("boxShadowColor", "box-shadow"),
    ("ringOffsetColor", "ring-offset"),
    ("placeholderColor", "placeholder"),
    ("textDecorationColor", "text-decoration"),
    ("gradientColorStops", "gradient"),
    ("fill", "fill"),
    ("stroke", "stroke"),
];

/// Category -> [`CategorySpec`] lookup.
///
/// Deserializing a table layers the given entries over the built-ins, so
/// config files only list categories they add or change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTable {
    entries: IndexMap<String, CategorySpec>,
}

impl CategoryTable {
    /// Table with no entries; every category falls back to plain values.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let entries = BUILTIN_COLOR_CATEGORIES
            .iter()
            .map(|(name, prefix)| (name.to_string(), CategorySpec::color(prefix)))
            .collect();
        Self { entries }
    }

    /// Add or replace a category, returning the previous spec.
    pub fn insert(&mut self, category: impl Into<String>, spec: CategorySpec) -> Option<CategorySpec> {
        self.entries.insert(category.into(), spec)
    }

    pub fn with(mut self, category: impl Into<String>, spec: CategorySpec) -> Self {
        self.insert(category, spec);
        self
    }

    pub fn get(&self, category: &str) -> Option<&CategorySpec> {
        self.entries.get(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the category's prefix (without user prefix) and kind.
    pub fn resolve(&self, category: &str) -> (String, PropertyKind) {
        match self.entries.get(category) {
            Some(spec) => (
                spec.prefix
                    .clone()
                    .unwrap_or_else(|| camel_to_kebab(category)),
                spec.kind,
            ),
            None => (camel_to_kebab(category), PropertyKind::default()),
        }
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'de> Deserialize<'de> for CategoryTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = IndexMap::<String, CategorySpec>::deserialize(deserializer)?;
        let mut table = Self::builtin();
        table.entries.extend(overrides);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_all_color_categories() {
        let table = CategoryTable::builtin();
        assert_eq!(table.len(), 16);
        assert_eq!(
            table.resolve("backgroundColor"),
            ("bg".to_string(), PropertyKind::Color)
        );
        assert_eq!(table.resolve("colors"), (String::new(), PropertyKind::Color));
        assert_eq!(
            table.resolve("ringOffsetColor"),
            ("ring-offset".to_string(), PropertyKind::Color)
        );
    }

    #[test]
    fn unknown_category_falls_back_to_kebab_plain() {
        let table = CategoryTable::builtin();
        assert_eq!(
            table.resolve("fontFamily"),
            ("font-family".to_string(), PropertyKind::Plain)
        );
    }

    #[test]
    fn spec_without_prefix_derives_it() {
        let table = CategoryTable::empty().with(
            "brandPalette",
            CategorySpec {
                prefix: None,
                kind: PropertyKind::Color,
            },
        );
        assert_eq!(
            table.resolve("brandPalette"),
            ("brand-palette".to_string(), PropertyKind::Color)
        );
    }

    #[test]
    fn empty_table_treats_colors_as_plain() {
        let table = CategoryTable::empty();
        assert!(table.is_empty());
        assert_eq!(
            table.resolve("colors"),
            ("colors".to_string(), PropertyKind::Plain)
        );
    }

    #[test]
    fn deserialized_entries_layer_over_builtins() {
        let table: CategoryTable = serde_json::from_str(
            r#"{"spacing": {"prefix": "space"}, "fill": {"kind": "plain"}}"#,
        )
        .unwrap();
        assert_eq!(table.len(), 17);
        assert_eq!(
            table.resolve("spacing"),
            ("space".to_string(), PropertyKind::Plain)
        );
        assert_eq!(
            table.resolve("fill"),
            ("fill".to_string(), PropertyKind::Plain)
        );
        assert_eq!(
            table.resolve("textColor"),
            ("text".to_string(), PropertyKind::Color)
        );
    }
}
