pub mod errors;
pub mod types;

pub use errors::{ColorError, ThemeError, TokenError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, ThemeError>;
