//! Finalized payload handed to the host build tool.

use crate::css::CssRuleSet;
use crate::theme::ReferenceTree;
use serde::{Deserialize, Serialize};

/// Base rules to inject plus the theme extension config.
///
/// Serializes as `{"base": {...}, "config": {"theme": {"extend": {...}}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePlugin {
    pub base: CssRuleSet,
    pub config: PluginConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub theme: ThemeExtension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeExtension {
    pub extend: ReferenceTree,
}

impl ThemePlugin {
    pub fn new(base: CssRuleSet, extend: ReferenceTree) -> Self {
        Self {
            base,
            config: PluginConfig {
                theme: ThemeExtension { extend },
            },
        }
    }

    pub fn extend(&self) -> &ReferenceTree {
        &self.config.theme.extend
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize theme plugin: {e}\"}}"))
    }
}
