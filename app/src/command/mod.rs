//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use std::ffi::OsString;
use std::path::PathBuf;

use advent_config::{Config, SESSION_KEY};
use tracing::info;

mod ensure;
mod fetch;
mod info;
mod init;
mod version;

pub use ensure::EnsureStrategy;
pub use fetch::{FetchInput, FetchStrategy};
pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Where to load the config from, plus per-invocation overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigInput {
    /// Explicit config file; the search paths are used when absent
    pub env_file: Option<PathBuf>,
    /// Event year override
    pub year: Option<u16>,
    /// Output directory override
    pub inputs_dir: Option<PathBuf>,
    /// Session credential override, applied after the environment
    pub session: Option<String>,
}

/// Load the config and apply command-line overrides.
fn load_config(input: &ConfigInput) -> anyhow::Result<Config> {
    resolve_config(input, std::env::vars_os())
}

/// A session flag is appended after `vars`, so it wins over both the file
/// and the environment and satisfies discovery when no file exists.
fn resolve_config<I>(input: &ConfigInput, vars: I) -> anyhow::Result<Config>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let session = input
        .session
        .clone()
        .map(|session| (OsString::from(SESSION_KEY), OsString::from(session)));
    let mut config =
        Config::load_with_vars(input.env_file.as_deref(), vars.into_iter().chain(session))?;

    if let Some(year) = input.year {
        config.year = year;
    }
    if let Some(dir) = &input.inputs_dir {
        config.inputs_dir.clone_from(dir);
    }

    info!(
        "Using year {} with inputs dir {}",
        config.year,
        config.inputs_dir.display()
    );
    Ok(config)
}

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
