//! confsync — entry point.
//!
//! Checks a deployed JSON configuration against the sample configuration
//! shipped with the application, and fills in entries the deployment lacks.
//!
//! # Usage
//!
//! ```text
//! confsync [OPTIONS]
//!
//! Options:
//!   --check          Check that the sample config and the user config are in line
//!   --update         Add entries missing from the user config
//!   --home <DIR>     Application base directory [env: CONFSYNC_HOME]
//!   --name <NAME>    Config file name, repeatable [default: generic]
//! ```
//!
//! Files are looked up as `<home>/config/<name>.json.sample` (reference) and
//! `<home>/config/<name>.json` (user).  With neither `--check` nor `--update`
//! the tool does nothing.  Any validation failure exits non-zero with the
//! failure message.
//!
//! Logs go to stderr at `warn` by default; set `RUST_LOG=info` to see every
//! file write.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use confsync::application::update::{update_configs, ConfigUpdate};
use confsync::application::validate::{valid_notice, validate_config};
use confsync::infrastructure::home::resolve_home;
use confsync::infrastructure::storage::{ConfigStore, FsConfigStore};
use confsync::DEFAULT_CONFIG_NAMES;

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "confsync",
    about = "Check and update JSON config files against their shipped samples",
    version
)]
struct Cli {
    /// Check if the sample config and the user config are in line.
    #[arg(long)]
    check: bool,

    /// Update the user config with the entries from the sample config if
    /// entries are missing.
    #[arg(long)]
    update: bool,

    /// Application base directory holding `config/`.
    ///
    /// Defaults to the current working directory.
    #[arg(long, env = "CONFSYNC_HOME")]
    home: Option<PathBuf>,

    /// Config file name (without extension).  May be given more than once.
    #[arg(long = "name", value_name = "NAME")]
    names: Vec<String>,
}

impl Cli {
    /// The config names to process, falling back to the defaults.
    fn config_names(&self) -> Vec<String> {
        if self.names.is_empty() {
            DEFAULT_CONFIG_NAMES.iter().map(|n| n.to_string()).collect()
        } else {
            self.names.clone()
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if !cli.check && !cli.update {
        return Ok(());
    }

    let home = resolve_home(cli.home.clone()).context("cannot locate config files")?;
    let store = FsConfigStore::new(&home);
    let names = cli.config_names();

    if cli.check {
        for name in &names {
            validate_config(&store, name)?;
            println!("{}", valid_notice(&store.user_location(name)));
        }
    }

    if cli.update {
        let report = update_configs(&store, &names)?;
        for line in report.configs.iter().flat_map(ConfigUpdate::summary) {
            println!("{line}");
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
