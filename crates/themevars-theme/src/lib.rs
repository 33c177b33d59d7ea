//! Design tokens to CSS variables.
//!
//! Converts a theme of token categories (`colors`, `backgroundColor`,
//! `spacing`, ...) into two outputs: CSS rules declaring one custom
//! property per token, and a reference tree of the same shape whose leaves
//! read those properties back (`hsl(var(--primary) / <alpha-value>)`).
//! Variants override the variable values under another selector or
//! at-rule, e.g. for a dark palette.
//!
//! # Quick Start
//!
//! ```rust
//! use themevars_theme::{Theme, ThemeOptions, VariantOptions};
//! use themevars_tokens::{parse_tokens, TokenFormat};
//!
//! let base = parse_tokens(r##"{"colors": {"primary": "#ffffff"}}"##, TokenFormat::Json).unwrap();
//! let dark = parse_tokens(r##"{"colors": {"primary": "#000000"}}"##, TokenFormat::Json).unwrap();
//!
//! let mut theme = Theme::new(&base, ThemeOptions::default()).unwrap();
//! theme
//!     .variant(&dark, VariantOptions::media_query("@media (prefers-color-scheme: dark)"))
//!     .unwrap();
//!
//! let plugin = theme.create(None);
//! assert_eq!(plugin.base.declarations(":root").unwrap()["--primary"], "0 0% 100%");
//! println!("{}", plugin.to_json());
//! ```

pub mod categories;
pub mod colors;
pub mod css;
pub mod document;
pub mod options;
pub mod plugin;
pub mod property;
pub mod theme;

pub use categories::{CategorySpec, CategoryTable};
pub use colors::{parse_color, validate_color, ColorFormat};
pub use css::{CssRule, CssRuleSet};
pub use document::{ThemeDocument, VariantDocument};
pub use options::{ThemeOptions, VariantOptions, DEFAULT_SELECTOR};
pub use plugin::ThemePlugin;
pub use property::{PropertyConverter, PropertyCss, PropertyKind, PropertyOptions, VariableStore};
pub use theme::{ReferenceTree, Theme, ThemeCss};
