//! Token tree data model.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Reserved key holding a nested node's own value.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Nested token mapping. Iteration follows insertion order.
pub type TokenTree = IndexMap<String, TokenValue>;

/// Dash-joined path to leaf value.
pub type FlatConfig = IndexMap<String, String>;

/// A single entry in a [`TokenTree`].
///
/// `Empty` stands for any falsy input (`null`, booleans, `0`, `""`) and
/// is skipped wherever trees are walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Empty,
    Leaf(String),
    Group(TokenTree),
}

impl TokenValue {
    pub fn leaf(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Leaf(value)
        }
    }

    /// True for values that define no token.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Leaf(s) => s.is_empty(),
            Self::Group(_) => false,
        }
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenTree> {
        match self {
            Self::Group(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::leaf(value)
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::leaf(value)
    }
}

impl From<TokenTree> for TokenValue {
    fn from(tree: TokenTree) -> Self {
        Self::Group(tree)
    }
}

/// Anything a JSON, YAML or TOML document can put at a token position.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Null,
    Bool(#[allow(dead_code)] bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Group(IndexMap<String, RawToken>),
}

impl From<RawToken> for TokenValue {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Null | RawToken::Bool(_) => Self::Empty,
            RawToken::Integer(0) => Self::Empty,
            RawToken::Integer(n) => Self::Leaf(n.to_string()),
            RawToken::Float(f) if f == 0.0 || f.is_nan() => Self::Empty,
            RawToken::Float(f) => Self::Leaf(f.to_string()),
            RawToken::Text(s) => Self::leaf(s),
            RawToken::Group(map) => Self::Group(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for TokenValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawToken::deserialize(deserializer).map(TokenValue::from)
    }
}
