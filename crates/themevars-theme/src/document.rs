//! Theme documents: options, base tokens and variants in one file.
//!
//! ```yaml
//! options:
//!   prefix: tw
//! theme:
//!   colors:
//!     primary: "#ffffff"
//! variants:
//!   - media_query: "@media (prefers-color-scheme: dark)"
//!     tokens:
//!       colors:
//!         primary: "#000000"
//! ```

use crate::css::CssRuleSet;
use crate::options::{ThemeOptions, VariantOptions};
use crate::plugin::ThemePlugin;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use themevars_common::ThemeError;
use themevars_tokens::{load_document_from_path, parse_document, TokenFormat, TokenTree};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDocument {
    pub options: ThemeOptions,
    pub theme: TokenTree,
    pub variants: Vec<VariantDocument>,
    /// Extra base rules, taking precedence over generated ones.
    pub base: Option<CssRuleSet>,
}

/// A variant entry: its scope plus the partial token tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantDocument {
    #[serde(flatten)]
    pub options: VariantOptions,
    #[serde(default)]
    pub tokens: TokenTree,
}

impl ThemeDocument {
    /// Load a document from a JSON, YAML or TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ThemeError> {
        Ok(load_document_from_path(path)?)
    }

    pub fn parse(content: &str, format: TokenFormat) -> Result<Self, ThemeError> {
        Ok(parse_document(content, format)?)
    }

    /// Build the theme, apply every variant in order and finalize.
    pub fn build(&self) -> Result<ThemePlugin, ThemeError> {
        let mut theme = Theme::new(&self.theme, self.options.clone())?;
        for variant in &self.variants {
            theme.variant(&variant.tokens, variant.options.clone())?;
        }
        info!(
            categories = theme.properties().len(),
            variants = self.variants.len(),
            "built theme document"
        );
        Ok(theme.create(self.base.as_ref()))
    }
}
