//! Error taxonomy for the generator.
//!
//! Probe failures are deliberately absent: a pkg-config that cannot be
//! spawned is a negative probe result, not an error.

use thiserror::Error;

use crate::branding::Branding;

/// Errors raised while resolving options or rendering tables.
#[derive(Error, Debug)]
pub enum GenError {
    /// `--branding` was not given
    #[error("--branding is required ({} or {})", Branding::Mozc, Branding::GoogleJapaneseInput)]
    MissingBranding,

    /// `--branding` names a product we do not know
    #[error(
        "unknown branding '{name}' (expected {} or {})",
        Branding::Mozc,
        Branding::GoogleJapaneseInput,
        name = .0
    )]
    UnknownBranding(String),

    /// An engine property does not carry one value per engine
    #[error("engine property '{key}' has {actual} values but there are {expected} engines")]
    Structural {
        key: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `--ibus_version` is not a version number
    #[error("invalid IBus version '{input}': {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: semver::Error,
    },

    /// Writing the generated document failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GenError>;
