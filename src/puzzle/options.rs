//! Puzzle generation options and their TOML configuration file.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! difficulty = 50              # 0 (few dots) ..= 100 (many dots)
//! start_position = "top-left"  # "top-left" | "top-right" | "center"
//! max_dimension = 400          # working resolution bound in pixels
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PuzzleError};

/// Default working-resolution bound (longest side, in pixels).
pub const DEFAULT_MAX_DIMENSION: u32 = 400;
/// Default difficulty, the midpoint of the 0-100 range.
pub const DEFAULT_DIFFICULTY: u8 = 50;

/// Where dot number 1 is placed on the outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartPosition {
    /// Closest to the top-left corner (smallest x + y)
    #[default]
    TopLeft,
    /// Closest to the top-right corner (smallest (max_x - x) + y)
    TopRight,
    /// Closest to the centroid of all dots
    Center,
}

impl StartPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartPosition::TopLeft => "top-left",
            StartPosition::TopRight => "top-right",
            StartPosition::Center => "center",
        }
    }
}

impl fmt::Display for StartPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartPosition {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(StartPosition::TopLeft),
            "top-right" => Ok(StartPosition::TopRight),
            "center" => Ok(StartPosition::Center),
            other => Err(PuzzleError::InvalidStartPosition(other.to_string())),
        }
    }
}

/// Options for a single puzzle run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleOptions {
    /// 0 (easy, few dots) to 100 (hard, many dots)
    pub difficulty: u8,
    pub start_position: StartPosition,
    /// Longest side of the working raster; larger images are downscaled
    pub max_dimension: u32,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            start_position: StartPosition::default(),
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl PuzzleOptions {
    /// Check ranges that the type system does not.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.difficulty > 100 {
            return Err(PuzzleError::InvalidDifficulty(self.difficulty));
        }
        if self.max_dimension == 0 {
            return Err(PuzzleError::InvalidMaxDimension);
        }
        Ok(())
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load options from a TOML file.
    ///
    /// Returns the defaults if the file doesn't exist, and an error if it
    /// exists but cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("config: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate().map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("config: loaded {:?} from {}", options, path.display());
        Ok(options)
    }
}
