//! Per-category conversion of token values into CSS variables.
//!
//! A [`PropertyConverter`] turns one category's value into a
//! [`VariableStore`] (variable name -> stored value) and a parallel
//! reference fragment (token path -> expression reading the variable).
//! How values are encoded is picked by [`PropertyKind`].

use crate::colors::{parse_color, ColorFormat};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use themevars_common::{ColorError, ThemeError, TokenError};
use themevars_tokens::{
    camel_to_kebab, flatten, join_path, FlatConfig, TokenTree, TokenValue, DEFAULT_KEY,
};
use tracing::debug;

/// Generated variable name -> stored value.
pub type VariableStore = IndexMap<String, String>;

/// Value encoding strategy for a token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Stored verbatim, referenced as `var(--x)`.
    #[default]
    Plain,
    /// Stored as a component triple, referenced with an alpha placeholder.
    Color,
}

impl PropertyKind {
    /// Encode a raw token value for storage in a variable.
    pub fn encode(&self, raw: &str, format: ColorFormat) -> Result<String, ColorError> {
        match self {
            Self::Plain => Ok(raw.to_string()),
            Self::Color => {
                let color = parse_color(raw)?;
                if color.a != 255 {
                    debug!(value = raw, "dropping alpha channel from color token");
                }
                Ok(format.components(&color))
            }
        }
    }

    /// Expression that reads `variable` back.
    pub fn reference(&self, variable: &str, format: ColorFormat) -> String {
        match self {
            Self::Plain => format!("var({variable})"),
            Self::Color => format.reference(variable),
        }
    }
}

/// Format a generated name as a CSS custom property (`--name`).
pub fn variable_name(name: &str) -> String {
    format!("--{name}")
}

#[derive(Debug, Clone)]
pub struct PropertyOptions {
    /// Fully resolved naming prefix, user prefix included. May be empty.
    pub prefix: String,
    pub kind: PropertyKind,
    pub color_format: ColorFormat,
}

/// Output of converting a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCss {
    pub variables: VariableStore,
    /// A leaf reference for bare values, else flat path -> reference.
    pub properties: TokenValue,
}

pub struct PropertyConverter<'a> {
    category: &'a str,
    value: &'a TokenValue,
    options: PropertyOptions,
}

impl<'a> PropertyConverter<'a> {
    pub fn new(category: &'a str, value: &'a TokenValue, options: PropertyOptions) -> Self {
        Self {
            category,
            value,
            options,
        }
    }

    pub fn to_css(&self) -> Result<PropertyCss, ThemeError> {
        match self.value {
            TokenValue::Leaf(raw) if !raw.is_empty() => {
                let variable = variable_name(&self.own_name());
                let stored = self.encode(DEFAULT_KEY, raw)?;
                let reference = self.reference(&variable);

                let mut variables = VariableStore::with_capacity(1);
                variables.insert(variable, stored);
                Ok(PropertyCss {
                    variables,
                    properties: TokenValue::Leaf(reference),
                })
            }
            TokenValue::Group(tree) => self.convert_tree(tree),
            _ => Ok(PropertyCss {
                variables: VariableStore::new(),
                properties: TokenValue::Empty,
            }),
        }
    }

    fn convert_tree(&self, tree: &TokenTree) -> Result<PropertyCss, ThemeError> {
        let flat = self.flatten_category(tree)?;

        let mut variables = VariableStore::with_capacity(flat.len());
        let mut origins: IndexMap<String, &str> = IndexMap::with_capacity(flat.len());
        let mut fragment = TokenTree::with_capacity(flat.len());

        for (path, raw) in &flat {
            let name = if path == DEFAULT_KEY {
                self.own_name()
            } else {
                join_path(&self.options.prefix, path)
            };
            let variable = variable_name(&name);
            let stored = self.encode(path, raw)?;
            let reference = self.reference(&variable);

            if let Some(first) = origins.get(&variable) {
                return Err(ThemeError::DuplicateVariable {
                    name: variable,
                    first: format!("{}.{first}", self.category),
                    second: format!("{}.{path}", self.category),
                });
            }
            origins.insert(variable.clone(), path);
            variables.insert(variable, stored);
            fragment.insert(path.clone(), TokenValue::Leaf(reference));
        }

        Ok(PropertyCss {
            variables,
            properties: TokenValue::Group(fragment),
        })
    }

    /// Flatten a category tree. A top-level `DEFAULT` group holds tokens of
    /// the category itself, so its children land directly under the prefix.
    fn flatten_category(&self, tree: &TokenTree) -> Result<FlatConfig, ThemeError> {
        let Some(TokenValue::Group(default)) = tree.get(DEFAULT_KEY) else {
            return flatten(tree).map_err(|e| self.token_error(e));
        };

        let mut flat = flatten(default).map_err(|e| self.token_error(e))?;
        let rest: TokenTree = tree
            .iter()
            .filter(|(key, _)| key.as_str() != DEFAULT_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        for (path, value) in flatten(&rest).map_err(|e| self.token_error(e))? {
            match flat.entry(path) {
                Entry::Occupied(entry) => {
                    return Err(ThemeError::DuplicateTokenPath {
                        category: self.category.to_string(),
                        path: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Ok(flat)
    }

    fn token_error(&self, err: TokenError) -> ThemeError {
        match err {
            TokenError::DuplicatePath(path) => ThemeError::DuplicateTokenPath {
                category: self.category.to_string(),
                path,
            },
            other => other.into(),
        }
    }

    /// Name for the category's own value: the prefix, or the kebab-cased
    /// category when the prefix is empty.
    fn own_name(&self) -> String {
        if self.options.prefix.is_empty() {
            camel_to_kebab(self.category)
        } else {
            self.options.prefix.clone()
        }
    }

    fn encode(&self, path: &str, raw: &str) -> Result<String, ThemeError> {
        self.options
            .kind
            .encode(raw, self.options.color_format)
            .map_err(|source| ThemeError::MalformedColorValue {
                category: self.category.to_string(),
                path: path.to_string(),
                value: raw.to_string(),
                source,
            })
    }

    fn reference(&self, variable: &str) -> String {
        self.options
            .kind
            .reference(variable, self.options.color_format)
    }
}
