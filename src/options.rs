//! Option resolution: turns raw generator options into the substitution
//! parameters and the setup command line.

use std::path::Path;

use tracing::debug;

use crate::branding::Branding;
use crate::error::{GenError, Result};
use crate::params::{Param, Params};

/// Executable launched by the IBus "setup" action, relative to `server_dir`.
pub const SETUP_TOOL: &str = "mozc_tool";

/// Flag selecting the configuration dialog of [`SETUP_TOOL`].
pub const SETUP_MODE_FLAG: &str = "--mode=config_dialog";

/// Output document selected by `--output_cpp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Component XML consumed by ibus-daemon
    #[default]
    Xml,
    /// C++ header consumed by the engine binary
    Cpp,
}

/// Raw generator options, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub format: OutputFormat,
    pub branding: Option<String>,
    pub ibus_mozc_path: String,
    pub ibus_mozc_icon_path: String,
    pub server_dir: String,
}

impl Options {
    pub fn branding(&self) -> Result<Branding> {
        self.branding
            .as_deref()
            .ok_or(GenError::MissingBranding)?
            .parse()
    }

    /// Builds the substitution parameters. Fails on a missing or unknown branding.
    pub fn params(&self) -> Result<Params> {
        let branding = self.branding()?;
        let params = Params::new(branding, &self.ibus_mozc_path, &self.ibus_mozc_icon_path);
        for param in Param::ALL {
            debug!(key = param.key(), value = params.get(param), "resolved parameter");
        }
        Ok(params)
    }

    /// The command line ibus-daemon runs to open the settings dialog.
    pub fn setup_arg(&self) -> Vec<String> {
        let tool = Path::new(&self.server_dir).join(SETUP_TOOL);
        vec![
            tool.to_string_lossy().into_owned(),
            SETUP_MODE_FLAG.to_string(),
        ]
    }
}
