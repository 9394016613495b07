use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::{EnvFile, Error, Result};

pub const SESSION_KEY: &str = "AOC_SESSION_ID";
pub const YEAR_KEY: &str = "AOC_YEAR";
pub const BASE_URL_KEY: &str = "AOC_BASE_URL";
pub const INPUTS_DIR_KEY: &str = "AOC_INPUTS_DIR";
pub const USER_AGENT_KEY: &str = "AOC_USER_AGENT";
pub const TIMEOUT_KEY: &str = "AOC_TIMEOUT_SECS";

/// First year puzzles were published.
const FIRST_YEAR: u16 = 2015;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Value of the `session` cookie. Serialized masked.
    #[serde(serialize_with = "serialize_masked")]
    pub session: String,
    pub year: u16,
    pub base_url: String,
    pub inputs_dir: PathBuf,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    fn default_base_url() -> String {
        "https://adventofcode.com".to_string()
    }

    fn default_inputs_dir() -> PathBuf {
        PathBuf::from("inputs")
    }

    fn default_user_agent() -> String {
        format!("advent/{}", env!("CARGO_PKG_VERSION"))
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    fn default_year() -> u16 {
        latest_event_year(chrono::Local::now().date_naive())
    }

    /// Build a config from parsed `KEY=VALUE` pairs.
    ///
    /// `AOC_SESSION_ID` is required and must be non-empty; every other key
    /// falls back to its default when absent.
    pub fn from_env_file(env: &EnvFile) -> Result<Self> {
        let session = env.get(SESSION_KEY).ok_or(Error::MissingKey(SESSION_KEY))?;
        if session.is_empty() {
            return Err(Error::InvalidValue {
                key: SESSION_KEY.to_string(),
                reason: "value is empty".to_string(),
            });
        }

        let year = match env.get(YEAR_KEY) {
            Some(raw) => {
                let year: u16 = parse_value(YEAR_KEY, raw)?;
                if year < FIRST_YEAR {
                    return Err(Error::InvalidValue {
                        key: YEAR_KEY.to_string(),
                        reason: format!("{year} is before the first event ({FIRST_YEAR})"),
                    });
                }
                year
            }
            None => Self::default_year(),
        };

        let base_url = match env.get(BASE_URL_KEY) {
            Some(raw) => validate_base_url(raw)?,
            None => Self::default_base_url(),
        };

        let timeout_secs = match env.get(TIMEOUT_KEY) {
            Some(raw) => {
                let secs: u64 = parse_value(TIMEOUT_KEY, raw)?;
                if secs == 0 {
                    return Err(Error::InvalidValue {
                        key: TIMEOUT_KEY.to_string(),
                        reason: "timeout must be at least 1 second".to_string(),
                    });
                }
                secs
            }
            None => Self::default_timeout_secs(),
        };

        Ok(Self {
            session: session.to_string(),
            year,
            base_url,
            inputs_dir: env
                .get(INPUTS_DIR_KEY)
                .filter(|dir| !dir.is_empty())
                .map_or_else(Self::default_inputs_dir, PathBuf::from),
            user_agent: env
                .get(USER_AGENT_KEY)
                .filter(|agent| !agent.is_empty())
                .map_or_else(Self::default_user_agent, str::to_string),
            timeout_secs,
        })
    }

    /// Locations checked when no config file is given explicitly.
    #[must_use]
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".env")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join("advent").join(".env"));
        }
        paths
    }

    /// Load the config from `path`, or from the first existing search path.
    ///
    /// `AOC_*` process environment variables override file values. Without a
    /// file, the environment alone must provide `AOC_SESSION_ID`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_vars(path, std::env::vars_os())
    }

    /// [`Config::load`] with the environment supplied by the caller.
    ///
    /// Later pairs in `vars` win over earlier ones.
    pub fn load_with_vars<I, K, V>(path: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        Self::load_from(path, &Self::search_paths(), vars)
    }

    fn load_from<I, K, V>(path: Option<&Path>, search_paths: &[PathBuf], vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let (mut env, source) = match path {
            Some(path) => (EnvFile::load(path)?, Some(path.to_path_buf())),
            None => match search_paths.iter().find(|p| p.is_file()) {
                Some(found) => (EnvFile::load(found)?, Some(found.clone())),
                None => (EnvFile::default(), None),
            },
        };

        env.overlay(vars)?;

        match source {
            Some(source) => info!("Loaded config from {}", source.display()),
            None if env.get(SESSION_KEY).is_some() => {
                debug!("No config file found, using environment only");
            }
            None => {
                let searched = search_paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(Error::NoConfigFile { searched });
            }
        }

        Self::from_env_file(&env)
    }

    /// Write a template config file at `path`. Never overwrites.
    pub fn create_template(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(Error::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let template = format!(
            "{SESSION_KEY}=your-session-cookie-here\n\
             {YEAR_KEY}={}\n\
             {INPUTS_DIR_KEY}={}\n",
            Self::default_year(),
            Self::default_inputs_dir().display(),
        );

        std::fs::write(path, template).map_err(|e| Error::io(path, e))?;
        info!("Created config template at {}", path.display());
        Ok(())
    }

    #[must_use]
    pub fn masked_session(&self) -> String {
        mask(&self.session)
    }
}

/// Latest year whose event has started: December counts as the current year.
#[must_use]
pub fn latest_event_year(today: NaiveDate) -> u16 {
    let year = if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    };
    u16::try_from(year).map_or(FIRST_YEAR, |y| y.max(FIRST_YEAR))
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e| Error::InvalidValue {
        key: key.to_string(),
        reason: format!("'{raw}': {e}"),
    })
}

fn validate_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw).map_err(|e| Error::InvalidValue {
        key: BASE_URL_KEY.to_string(),
        reason: format!("'{raw}': {e}"),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidValue {
            key: BASE_URL_KEY.to_string(),
            reason: format!("'{raw}': only http and https are supported"),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

fn serialize_masked<S: Serializer>(
    secret: &str,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&mask(secret))
}
