//! # ibus-mozc-gen - IBus registration data for Mozc
//!
//! Pre-generates the component XML that ibus-daemon caches for ibus-mozc, or
//! the C++ header carrying the same properties as constants. Generating the
//! XML at build time keeps ibus-daemon start-up fast: the engine binary does
//! not have to be launched with `--xml` to describe itself.
//!
//! ## Pipeline
//!
//! 1. [`options`] - resolve branding and paths into [`params::Params`]
//! 2. [`probe`] - ask pkg-config which IBus features are available
//! 3. [`props`] - assemble the property tables
//! 4. [`render`] - write XML or a C++ header
//!
//! ```no_run
//! use ibus_mozc_gen::options::Options;
//! use ibus_mozc_gen::probe::PkgConfigProbe;
//!
//! let options = Options {
//!     branding: Some("Mozc".to_string()),
//!     ..Default::default()
//! };
//! ibus_mozc_gen::generate(&options, &PkgConfigProbe::default(), &mut std::io::stdout().lock())?;
//! # Ok::<(), ibus_mozc_gen::error::GenError>(())
//! ```

use std::io::Write;

use tracing::debug;

/// Product branding lookup.
pub mod branding;

/// Error types.
pub mod error;

/// Command-line option resolution.
pub mod options;

/// Substitution parameters and typed templates.
pub mod params;

/// IBus version probing.
pub mod probe;

/// Component and engine property tables.
pub mod props;

/// XML and C++ header renderers.
pub mod render;

use error::Result;
use options::{Options, OutputFormat};
use probe::{Features, VersionProbe};
use props::Tables;

/// Runs one generation pass and writes the selected document to `out`.
///
/// Options are resolved before the probe runs, so a bad branding fails
/// without spawning anything and without output.
pub fn generate<W: Write>(options: &Options, probe: &dyn VersionProbe, out: &mut W) -> Result<()> {
    let params = options.params()?;
    let setup_arg = options.setup_arg();
    let tables = Tables::new(Features::detect(probe));

    debug!(format = ?options.format, "rendering");
    match options.format {
        OutputFormat::Xml => render::render_xml(out, &params, &tables, &setup_arg)?,
        OutputFormat::Cpp => render::render_cpp(out, &params, &tables)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Installed(bool);

    impl VersionProbe for Installed {
        fn at_least(&self, _minimum_version: &str) -> bool {
            self.0
        }
    }

    fn run(options: &Options, probe: &dyn VersionProbe) -> Result<String> {
        let mut buf = Vec::new();
        generate(options, probe, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_generate_xml_scenario() {
        let options = Options {
            branding: Some("Mozc".to_string()),
            ibus_mozc_path: "/usr/bin/ibus-mozc".to_string(),
            server_dir: "/usr/lib/mozc".to_string(),
            ..Default::default()
        };
        let xml = run(&options, &Installed(false)).unwrap();
        assert!(xml.contains("  <exec>/usr/bin/ibus-mozc --ibus</exec>\n"));
        assert!(xml.contains("  <layout>jp</layout>\n"));
        assert!(!xml.contains("<icon_prop_key>"));
        assert!(!xml.contains("<symbol>"));
    }

    #[test]
    fn test_generate_cpp_selected_by_format() {
        let options = Options {
            format: OutputFormat::Cpp,
            branding: Some("GoogleJapaneseInput".to_string()),
            ..Default::default()
        };
        let header = run(&options, &Installed(true)).unwrap();
        assert!(header.starts_with("// Copyright"));
        assert!(header.contains("const size_t kEngineArrayLen = 1;"));
        assert!(!header.contains("mozc_tool"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let options = Options {
            branding: Some("Mozc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            run(&options, &Installed(true)).unwrap(),
            run(&options, &Installed(true)).unwrap()
        );
    }

    #[test]
    fn test_bad_branding_produces_no_output() {
        let options = Options {
            branding: Some("Unknown".to_string()),
            ..Default::default()
        };
        let mut buf = Vec::new();
        assert!(generate(&options, &Installed(true), &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
