//! Accumulated CSS rules handed to the host's base-style injection.
//!
//! Keys are selectors (`:root`, `.dark`) or at-rules
//! (`@media (prefers-color-scheme: dark)`). Selectors map straight to
//! declarations; at-rules map to selectors first.

use crate::property::VariableStore;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A rule body: declarations, or selector blocks nested in an at-rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssRule {
    Declarations(VariableStore),
    Nested(IndexMap<String, VariableStore>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssRuleSet {
    rules: IndexMap<String, CssRule>,
}

impl CssRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CssRule> {
        self.rules.get(key)
    }

    /// Declarations registered directly under `selector`.
    pub fn declarations(&self, selector: &str) -> Option<&VariableStore> {
        match self.rules.get(selector)? {
            CssRule::Declarations(decls) => Some(decls),
            CssRule::Nested(_) => None,
        }
    }

    /// Declarations registered under `selector` inside `at_rule`.
    pub fn nested(&self, at_rule: &str, selector: &str) -> Option<&VariableStore> {
        match self.rules.get(at_rule)? {
            CssRule::Nested(blocks) => blocks.get(selector),
            CssRule::Declarations(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CssRule)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Merge `variables` into the block for `selector`; later values win.
    pub fn insert_declarations(&mut self, selector: &str, variables: VariableStore) {
        match self.rules.get_mut(selector) {
            Some(CssRule::Declarations(existing)) => existing.extend(variables),
            existing => {
                if existing.is_some() {
                    warn!(selector, "replacing nested rule with declarations");
                }
                self.rules
                    .insert(selector.to_string(), CssRule::Declarations(variables));
            }
        }
    }

    /// Merge `variables` into `selector` nested under `at_rule`.
    pub fn insert_nested(&mut self, at_rule: &str, selector: &str, variables: VariableStore) {
        match self.rules.get_mut(at_rule) {
            Some(CssRule::Nested(blocks)) => match blocks.get_mut(selector) {
                Some(existing) => existing.extend(variables),
                None => {
                    blocks.insert(selector.to_string(), variables);
                }
            },
            existing => {
                if existing.is_some() {
                    warn!(at_rule, "replacing declarations with nested rule");
                }
                let mut blocks = IndexMap::with_capacity(1);
                blocks.insert(selector.to_string(), variables);
                self.rules.insert(at_rule.to_string(), CssRule::Nested(blocks));
            }
        }
    }

    /// Overlay another rule set; its entries replace ours key by key.
    pub fn extend(&mut self, other: &CssRuleSet) {
        for (key, rule) in &other.rules {
            self.rules.insert(key.clone(), rule.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> VariableStore {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn declarations_merge_later_wins() {
        let mut rules = CssRuleSet::new();
        rules.insert_declarations(":root", vars(&[("--a", "1"), ("--b", "2")]));
        rules.insert_declarations(":root", vars(&[("--b", "3")]));

        let root = rules.declarations(":root").unwrap();
        assert_eq!(root, &vars(&[("--a", "1"), ("--b", "3")]));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn nested_rules_are_two_levels_deep() {
        let mut rules = CssRuleSet::new();
        rules.insert_nested("@media (prefers-color-scheme: dark)", ":root", vars(&[("--a", "1")]));
        rules.insert_nested("@media (prefers-color-scheme: dark)", ":root", vars(&[("--b", "2")]));

        assert!(rules.declarations("@media (prefers-color-scheme: dark)").is_none());
        let dark = rules
            .nested("@media (prefers-color-scheme: dark)", ":root")
            .unwrap();
        assert_eq!(dark, &vars(&[("--a", "1"), ("--b", "2")]));
    }

    #[test]
    fn extend_replaces_whole_entries() {
        let mut rules = CssRuleSet::new();
        rules.insert_declarations(":root", vars(&[("--a", "1"), ("--b", "2")]));
        rules.insert_declarations(".dark", vars(&[("--a", "0")]));

        let mut extra = CssRuleSet::new();
        extra.insert_declarations(":root", vars(&[("--c", "3")]));
        rules.extend(&extra);

        assert_eq!(rules.declarations(":root").unwrap(), &vars(&[("--c", "3")]));
        assert_eq!(rules.declarations(".dark").unwrap(), &vars(&[("--a", "0")]));
    }

    #[test]
    fn serializes_as_nested_objects() {
        let mut rules = CssRuleSet::new();
        rules.insert_declarations(":root", vars(&[("--primary", "0 0% 100%")]));
        rules.insert_nested("@media print", ":root", vars(&[("--primary", "0 0% 0%")]));

        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(
            json,
            r#"{":root":{"--primary":"0 0% 100%"},"@media print":{":root":{"--primary":"0 0% 0%"}}}"#
        );

        let back: CssRuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rules);
    }

    #[test]
    fn nested_registration_replaces_declarations_block() {
        let mut rules = CssRuleSet::new();
        rules.insert_declarations("@media print", vars(&[("--a", "1")]));
        rules.insert_nested("@media print", ":root", vars(&[("--b", "2")]));

        assert!(rules.declarations("@media print").is_none());
        assert_eq!(rules.nested("@media print", ":root").unwrap()["--b"], "2");
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn declarations_registration_replaces_nested_block() {
        let mut rules = CssRuleSet::new();
        rules.insert_nested(".dark", ":root", vars(&[("--a", "1")]));
        rules.insert_declarations(".dark", vars(&[("--b", "2")]));

        assert!(rules.nested(".dark", ":root").is_none());
        let decls = rules.declarations(".dark").unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls["--b"], "2");
    }
}
