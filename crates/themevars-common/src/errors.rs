use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("invalid color function: {0}")]
    InvalidFunction(String),

    #[error("unrecognized color format: {0}")]
    Unrecognized(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token path `{0}` is defined more than once")]
    DuplicatePath(String),

    #[error("token file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("token parse error: {0}")]
    ParseError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("malformed color value {value:?} at `{category}.{path}`: {source}")]
    MalformedColorValue {
        category: String,
        path: String,
        value: String,
        source: ColorError,
    },

    #[error("duplicate token path `{path}` in category `{category}`")]
    DuplicateTokenPath { category: String, path: String },

    #[error("css variable `{name}` is generated by both `{first}` and `{second}`")]
    DuplicateVariable {
        name: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Token(#[from] TokenError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::InvalidHex("#xyz".into());
        assert_eq!(err.to_string(), "invalid hex color: #xyz");

        let err = ColorError::Unrecognized("not-a-color".into());
        assert_eq!(err.to_string(), "unrecognized color format: not-a-color");
    }

    #[test]
    fn token_error_display() {
        let err = TokenError::FileNotFound(PathBuf::from("/tmp/missing.yaml"));
        assert_eq!(err.to_string(), "token file not found: /tmp/missing.yaml");

        let err = TokenError::DuplicatePath("primary-light".into());
        assert_eq!(
            err.to_string(),
            "token path `primary-light` is defined more than once"
        );
    }

    #[test]
    fn malformed_color_names_category_and_path() {
        let err = ThemeError::MalformedColorValue {
            category: "colors".into(),
            path: "primary".into(),
            value: "not-a-color".into(),
            source: ColorError::Unrecognized("not-a-color".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("`colors.primary`"));
        assert!(msg.contains("\"not-a-color\""));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn theme_error_from_token() {
        let token_err = TokenError::ParseError("bad yaml".into());
        let theme_err: ThemeError = token_err.into();
        assert!(matches!(theme_err, ThemeError::Token(_)));
        assert!(theme_err.to_string().contains("bad yaml"));
    }
}
