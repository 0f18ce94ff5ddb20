//! Error types for puzzle generation and configuration loading.
//!
//! The pipeline itself is total over any decoded RGBA raster: an image with
//! no usable outline is an `Ok` result with zero points, not an error. The
//! variants below only describe input the core cannot accept.

use std::path::PathBuf;

/// Errors returned when a raster or option set cannot be processed.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// Input raster is not RGBA
    #[error("expected an RGBA raster with 4 channels, got {0} channel(s)")]
    UnsupportedChannels(usize),

    /// Flat pixel buffer does not match the stated dimensions
    #[error("pixel buffer holds {actual} bytes, expected {expected} for the given dimensions")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Difficulty outside 0-100
    #[error("difficulty must be between 0 and 100, got {0}")]
    InvalidDifficulty(u8),

    /// Downscale bound of zero
    #[error("max dimension must be at least 1 pixel")]
    InvalidMaxDimension,

    /// Unknown start position name
    #[error("unknown start position '{0}' (expected top-left, top-right or center)")]
    InvalidStartPosition(String),
}

/// Errors that can occur when loading puzzle options from a TOML file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid options in '{}': {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: PuzzleError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_mismatch_display() {
        let err = PuzzleError::BufferSizeMismatch {
            expected: 400,
            actual: 399,
        };
        let msg = err.to_string();
        assert!(msg.contains("399"));
        assert!(msg.contains("400"));
    }

    #[test]
    fn test_invalid_difficulty_display() {
        let msg = PuzzleError::InvalidDifficulty(120).to_string();
        assert!(msg.contains("120"));
        assert!(msg.contains("0 and 100"));
    }

    #[test]
    fn test_config_error_exposes_source() {
        use std::error::Error;

        let err = ConfigError::Io {
            path: PathBuf::from("/tmp/puzzle.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/puzzle.toml"));
        assert!(err.source().is_some());
    }
}
