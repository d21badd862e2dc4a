//! Configuration file loading for the replay tool.
//!
//! Settings come from an optional TOML file; command-line flags override
//! them field by field.

use clap::ValueEnum;
use dojo_core::Piece;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The default promotion is not a knight, bishop, rook or queen letter.
    #[error("Invalid promotion piece: '{0}' (expected q, r, b or n)")]
    InvalidPromotion(char),
}

/// How the replay result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board diagram, move list and final state.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Settings for a replay run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReplayConfig {
    /// Piece letter used when a move reaches the last rank without a suffix.
    /// Defaults to 'q'.
    #[serde(default = "default_promotion")]
    pub promotion: char,
    /// Output format. Defaults to text.
    #[serde(default)]
    pub format: OutputFormat,
    /// Start position in FEN. Defaults to the standard position.
    #[serde(default)]
    pub fen: Option<String>,
}

fn default_promotion() -> char {
    'q'
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            promotion: default_promotion(),
            format: OutputFormat::default(),
            fen: None,
        }
    }
}

impl ReplayConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::config_path()`]
    /// is read when present and the defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let content = std::fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the path of the configuration file read by default.
    pub fn config_path() -> PathBuf {
        PathBuf::from("dojo.toml")
    }

    /// Returns the configured default promotion kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPromotion`] for anything but q, r, b or n.
    pub fn promotion_piece(&self) -> Result<Piece, ConfigError> {
        Piece::from_letter(self.promotion)
            .filter(|p| p.is_promotion_choice())
            .ok_or(ConfigError::InvalidPromotion(self.promotion))
    }
}
