//! Product branding selected by `--branding`.

use std::fmt;
use std::str::FromStr;

use crate::error::GenError;

/// The product a build is branded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branding {
    /// Open-source build
    Mozc,
    /// Official build
    GoogleJapaneseInput,
}

impl Branding {
    /// Accepted `--branding` values, in lookup order.
    pub const KEYS: [&'static str; 2] = ["Mozc", "GoogleJapaneseInput"];

    /// The human-readable product name substituted for `product_name`.
    pub fn product_name(self) -> &'static str {
        match self {
            Branding::Mozc => "Mozc",
            Branding::GoogleJapaneseInput => "Google Japanese Input",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Branding::Mozc => Self::KEYS[0],
            Branding::GoogleJapaneseInput => Self::KEYS[1],
        }
    }
}

impl FromStr for Branding {
    type Err = GenError;

    // Keys are matched exactly, as the build scripts pass them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mozc" => Ok(Branding::Mozc),
            "GoogleJapaneseInput" => Ok(Branding::GoogleJapaneseInput),
            other => Err(GenError::UnknownBranding(other.to_string())),
        }
    }
}

impl fmt::Display for Branding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
