//! IBus feature probing.
//!
//! Newer IBus releases understand extra engine properties. We ask the
//! package-metadata tool whether the installed `ibus-1.0` is recent enough,
//! or compare against a version given up front when cross-building.

use std::process::{Command, Stdio};

use semver::Version;
use tracing::{debug, warn};

use crate::error::{GenError, Result};

/// pkg-config module name of the IBus library.
pub const IBUS_MODULE: &str = "ibus-1.0";

/// First IBus release that honours `icon_prop_key`.
pub const ICON_PROP_KEY_MIN: &str = "1.5.11";

/// First IBus release that honours `symbol` and the `default` layout.
pub const SYMBOL_MIN: &str = "1.5.0";

/// Answers "is the installed IBus at least this version?".
pub trait VersionProbe {
    fn at_least(&self, minimum_version: &str) -> bool;
}

/// Queries `pkg-config --exists "ibus-1.0 >= <version>"`.
#[derive(Debug, Clone)]
pub struct PkgConfigProbe {
    program: String,
}

impl PkgConfigProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PkgConfigProbe {
    /// Uses `program` unless it is missing or blank, in which case plain
    /// `pkg-config` is run. Build environments often export `PKG_CONFIG=`.
    pub fn from_override(program: Option<&str>) -> Self {
        match program.map(str::trim) {
            Some(program) if !program.is_empty() => Self::new(program),
            _ => Self::default(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for PkgConfigProbe {
    fn default() -> Self {
        Self::new("pkg-config")
    }
}

impl VersionProbe for PkgConfigProbe {
    fn at_least(&self, minimum_version: &str) -> bool {
        let requirement = format!("{} >= {}", IBUS_MODULE, minimum_version);
        // stdout must stay clean: it carries the generated document.
        let status = Command::new(&self.program)
            .args(["--exists", &requirement])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                debug!(
                    program = %self.program,
                    %requirement,
                    success = status.success(),
                    "probed IBus version"
                );
                status.success()
            }
            Err(e) => {
                warn!(
                    program = %self.program,
                    error = %e,
                    "could not run package-metadata tool; assuming '{}' is not satisfied",
                    requirement
                );
                false
            }
        }
    }
}

/// Compares against a known installed IBus version without spawning anything.
#[derive(Debug, Clone)]
pub struct FixedVersionProbe {
    installed: Version,
}

impl FixedVersionProbe {
    pub fn new(installed: Version) -> Self {
        Self { installed }
    }

    /// Accepts `1`, `1.5` and `1.5.11` style versions.
    pub fn parse(input: &str) -> Result<Self> {
        let installed = parse_version(input).map_err(|source| GenError::InvalidVersion {
            input: input.to_string(),
            source,
        })?;
        Ok(Self::new(installed))
    }
}

impl VersionProbe for FixedVersionProbe {
    fn at_least(&self, minimum_version: &str) -> bool {
        match parse_version(minimum_version) {
            Ok(minimum) => self.installed >= minimum,
            Err(e) => {
                warn!(minimum_version, error = %e, "unparseable minimum version");
                false
            }
        }
    }
}

fn parse_version(input: &str) -> std::result::Result<Version, semver::Error> {
    let trimmed = input.trim();
    let padded = match trimmed.matches('.').count() {
        0 => format!("{}.0.0", trimmed),
        1 => format!("{}.0", trimmed),
        _ => trimmed.to_string(),
    };
    Version::parse(&padded)
}

/// Optional engine properties supported by the installed IBus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features {
    /// IBus >= 1.5.11: `icon_prop_key` is understood
    pub icon_prop_key: bool,
    /// IBus >= 1.5.0: `symbol` is understood and the `default` layout exists
    pub symbol: bool,
}

impl Features {
    /// Runs both probes, newest threshold first.
    pub fn detect(probe: &dyn VersionProbe) -> Self {
        let features = Self {
            icon_prop_key: probe.at_least(ICON_PROP_KEY_MIN),
            symbol: probe.at_least(SYMBOL_MIN),
        };
        debug!(?features, "detected IBus features");
        features
    }
}
