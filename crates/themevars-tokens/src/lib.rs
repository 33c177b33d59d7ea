//! Design-token trees and the flattening that turns them into dash-joined paths.
//!
//! A token tree is a nested mapping of names to either leaf strings or
//! further trees. A nested node may carry a `DEFAULT` entry holding the
//! node's own value next to its children.
//!
//! ```rust
//! use themevars_tokens::{flatten, parse_tokens, TokenFormat};
//!
//! let tree = parse_tokens(r##"{"primary": {"DEFAULT": "#fff", "dark": "#000"}}"##, TokenFormat::Json)
//!     .expect("valid json");
//! let flat = flatten(&tree).expect("no duplicate paths");
//! assert_eq!(flat["primary"], "#fff");
//! assert_eq!(flat["primary-dark"], "#000");
//! ```

pub mod flatten;
pub mod key_name;
pub mod loader;
pub mod tree;

pub use flatten::{flatten, flatten_with_prefix, join_path};
pub use key_name::camel_to_kebab;
pub use loader::{
    load_document_from_path, load_tokens_from_path, parse_document, parse_tokens, TokenFormat,
};
pub use tree::{FlatConfig, TokenTree, TokenValue, DEFAULT_KEY};
