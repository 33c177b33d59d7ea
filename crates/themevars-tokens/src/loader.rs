//! Token file loading.
//!
//! Token trees (and documents embedding them) can be written as JSON,
//! YAML or TOML. The format is picked from the file extension.

use crate::tree::TokenTree;
use serde::de::DeserializeOwned;
use std::path::Path;
use themevars_common::TokenError;
use tracing::info;

/// Serialization formats a token file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Json,
    Yaml,
    Toml,
}

impl TokenFormat {
    /// Pick a format from a file extension (`json`, `yaml`/`yml`, `toml`).
    pub fn from_path(path: &Path) -> Result<Self, TokenError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(TokenError::ParseError(format!(
                "unsupported token file extension: {}",
                path.display()
            ))),
        }
    }
}

/// Parse any deserializable document from a string in the given format.
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: TokenFormat,
) -> Result<T, TokenError> {
    match format {
        TokenFormat::Json => serde_json::from_str(content)
            .map_err(|e| TokenError::ParseError(format!("failed to parse JSON: {e}"))),
        TokenFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| TokenError::ParseError(format!("failed to parse YAML: {e}"))),
        TokenFormat::Toml => toml::from_str(content)
            .map_err(|e| TokenError::ParseError(format!("failed to parse TOML: {e}"))),
    }
}

/// Parse a token tree from a string.
pub fn parse_tokens(content: &str, format: TokenFormat) -> Result<TokenTree, TokenError> {
    parse_document(content, format)
}

/// Read and parse a document from `path`, choosing the format by extension.
pub fn load_document_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, TokenError> {
    if !path.exists() {
        return Err(TokenError::FileNotFound(path.to_path_buf()));
    }
    let format = TokenFormat::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        TokenError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let document = parse_document(&content, format)?;
    info!("loaded tokens from {}", path.display());
    Ok(document)
}

/// Load a token tree from a JSON, YAML or TOML file.
pub fn load_tokens_from_path(path: &Path) -> Result<TokenTree, TokenError> {
    load_document_from_path(path)
}
