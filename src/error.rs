use std::path::PathBuf;

/// Errors that can occur while a strategy produces its move.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("no playable column on the board")]
    NoLegalMoves,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_error_display() {
        assert_eq!(
            PlayError::NoLegalMoves.to_string(),
            "no playable column on the board"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.height must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.height must be >= 4"
        );
    }
}
