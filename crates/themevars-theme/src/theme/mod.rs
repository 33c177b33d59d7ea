//! Theme assembly.
//!
//! A [`Theme`] converts every category of a token tree into CSS variables,
//! registers them under its selector, and keeps the reference tree that
//! replaces the original values in the host's theme. Variants re-run the
//! same conversion over a partial tree and register the resulting values
//! under another selector or at-rule; the reference tree never changes
//! after construction.


use crate::css::CssRuleSet;
use crate::options::{ThemeOptions, VariantOptions, DEFAULT_SELECTOR};
use crate::plugin::ThemePlugin;
use crate::property::{PropertyConverter, PropertyOptions, VariableStore};
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use themevars_common::ThemeError;
use themevars_tokens::{join_path, TokenTree};
use tracing::{debug, warn};

/// Category -> reference fragment, exposed as the host's theme extension.
pub type ReferenceTree = TokenTree;

/// Variables and references generated from one token tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeCss {
    pub variables: VariableStore,
    pub properties: ReferenceTree,
}

#[derive(Debug, Clone)]
pub struct Theme {
    options: ThemeOptions,
    css_rules: CssRuleSet,
    properties: ReferenceTree,
    base_variables: IndexSet<String>,
}

impl Theme {
    /// Convert `theme` and register its variables under the configured selector.
    ///
    /// Fails on the first malformed color or name collision; nothing is
    /// built in that case.
    pub fn new(theme: &TokenTree, mut options: ThemeOptions) -> Result<Self, ThemeError> {
        if options.selector.is_empty() {
            options.selector = DEFAULT_SELECTOR.into();
        }

        let ThemeCss {
            variables,
            properties,
        } = generate_css(theme, &options)?;

        let base_variables = variables.keys().cloned().collect();
        let mut css_rules = CssRuleSet::new();
        css_rules.insert_declarations(&options.selector, variables);

        Ok(Self {
            options,
            css_rules,
            properties,
            base_variables,
        })
    }

    /// Run the conversion over `theme` with this theme's options, without
    /// registering anything.
    pub fn generate(&self, theme: &TokenTree) -> Result<ThemeCss, ThemeError> {
        generate_css(theme, &self.options)
    }

    /// Register a partial theme's variables under another scope.
    ///
    /// With `media_query`, the variables nest under
    /// `media_query -> selector` (selector defaulting to the theme's). With
    /// `selector`, they are also registered directly under it. The
    /// generated variables are returned either way.
    pub fn variant(
        &mut self,
        theme: &TokenTree,
        options: VariantOptions,
    ) -> Result<VariableStore, ThemeError> {
        let ThemeCss { variables, .. } = self.generate(theme)?;

        for name in variables.keys() {
            if !self.base_variables.contains(name) {
                warn!(variable = %name, "variant defines a variable the base theme does not");
            }
        }

        if let Some(media_query) = options.media_query.as_deref() {
            let selector = options
                .selector
                .as_deref()
                .unwrap_or(&self.options.selector);
            self.css_rules
                .insert_nested(media_query, selector, variables.clone());
        }

        if let Some(selector) = options.selector.as_deref() {
            self.css_rules.insert_declarations(selector, variables.clone());
        }

        debug!(
            selector = ?options.selector,
            media_query = ?options.media_query,
            variables = variables.len(),
            "registered theme variant"
        );
        Ok(variables)
    }

    /// Produce the host payload. Rules in `base` replace ours key by key.
    pub fn create(&self, base: Option<&CssRuleSet>) -> ThemePlugin {
        let mut rules = self.css_rules.clone();
        if let Some(base) = base {
            rules.extend(base);
        }
        ThemePlugin::new(rules, self.properties.clone())
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    pub fn selector(&self) -> &str {
        &self.options.selector
    }

    pub fn css_rules(&self) -> &CssRuleSet {
        &self.css_rules
    }

    pub fn properties(&self) -> &ReferenceTree {
        &self.properties
    }
}

fn generate_css(theme: &TokenTree, options: &ThemeOptions) -> Result<ThemeCss, ThemeError> {
    let mut variables = VariableStore::new();
    let mut properties = ReferenceTree::with_capacity(theme.len());
    let mut origins: IndexMap<String, String> = IndexMap::new();

    for (category, value) in theme {
        if value.is_empty() {
            continue;
        }

        let (category_prefix, kind) = options.categories.resolve(category);
        let prefix = match options.user_prefix() {
            Some(user) => join_path(user, &category_prefix),
            None => category_prefix,
        };

        let css = PropertyConverter::new(
            category,
            value,
            PropertyOptions {
                prefix,
                kind,
                color_format: options.color_format,
            },
        )
        .to_css()?;

        debug!(
            category = %category,
            ?kind,
            variables = css.variables.len(),
            "converted theme category"
        );

        for (name, stored) in css.variables {
            match origins.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(ThemeError::DuplicateVariable {
                        name: entry.key().clone(),
                        first: entry.get().clone(),
                        second: category.clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    variables.insert(entry.key().clone(), stored);
                    entry.insert(category.clone());
                }
            }
        }
        properties.insert(category.clone(), css.properties);
    }

    Ok(ThemeCss {
        variables,
        properties,
    })
}
