//! # gen_mozc_xml CLI Entry Point
//!
//! Prints the ibus-mozc component XML (default) or, with `--output_cpp`, the
//! C++ header used by the engine binary. Flag spellings match the build
//! scripts that invoke this tool.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use ibus_mozc_gen::options::{Options, OutputFormat};
use ibus_mozc_gen::probe::{FixedVersionProbe, PkgConfigProbe, VersionProbe};

#[derive(Parser)]
#[command(name = "gen_mozc_xml")]
#[command(about = "Generate ibus-mozc component XML or the matching C++ header")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Print the C++ header instead of the component XML
    #[arg(long = "output_cpp")]
    output_cpp: bool,
    /// Product branding: Mozc or GoogleJapaneseInput
    #[arg(long)]
    branding: Option<String>,
    /// Absolute path of the ibus-mozc engine executable
    #[arg(long = "ibus_mozc_path", default_value = "")]
    ibus_mozc_path: String,
    /// Absolute path of the ibus-mozc icon
    #[arg(long = "ibus_mozc_icon_path", default_value = "")]
    ibus_mozc_icon_path: String,
    /// Directory the Mozc server and mozc_tool are installed into
    #[arg(long = "server_dir", default_value = "")]
    server_dir: String,
    /// Package-metadata tool used to probe the installed IBus version
    #[arg(long = "pkg_config", env = "PKG_CONFIG")]
    pkg_config: Option<String>,
    /// Assume this IBus version is installed instead of running pkg-config
    #[arg(long = "ibus_version")]
    ibus_version: Option<String>,
    /// Log probe and rendering decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            format: if self.output_cpp {
                OutputFormat::Cpp
            } else {
                OutputFormat::Xml
            },
            branding: self.branding.clone(),
            ibus_mozc_path: self.ibus_mozc_path.clone(),
            ibus_mozc_icon_path: self.ibus_mozc_icon_path.clone(),
            server_dir: self.server_dir.clone(),
        }
    }

    fn probe(&self) -> Result<Box<dyn VersionProbe>> {
        Ok(match &self.ibus_version {
            Some(version) => Box::new(FixedVersionProbe::parse(version)?),
            None => Box::new(PkgConfigProbe::from_override(self.pkg_config.as_deref())),
        })
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options();
    let probe = cli.probe()?;
    let stdout = std::io::stdout();
    ibus_mozc_gen::generate(&options, probe.as_ref(), &mut stdout.lock())
        .context("Failed to generate ibus-mozc registration data")?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}
