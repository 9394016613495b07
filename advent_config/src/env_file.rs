use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Parsed `KEY=VALUE` configuration file.
///
/// Rules:
/// - blank lines are skipped
/// - each remaining line is split on its first `=`, so values may contain `=`
/// - key and value are trimmed
/// - a line with no `=` or an empty key is rejected
/// - a repeated key keeps its last value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: BTreeMap<String, String>,
}

impl EnvFile {
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::MalformedLine { line: index + 1 });
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(Error::MalformedLine { line: index + 1 });
            }

            entries.insert(key.to_string(), value.trim().to_string());
        }

        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let env_file = Self::parse(&content)?;
        debug!(
            "Loaded {} config entries from {}",
            env_file.len(),
            path.display()
        );
        Ok(env_file)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Apply `AOC_*` variables from `vars` on top of the file values.
    ///
    /// Callers normally pass `std::env::vars_os()`. Keys that are not UTF-8
    /// or lack the `AOC_` prefix are ignored; an `AOC_*` value that is not
    /// UTF-8 is an error.
    pub fn overlay<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        for (key, value) in vars {
            let Some(key) = key.as_ref().to_str().filter(|k| k.starts_with("AOC_")) else {
                continue;
            };
            let Some(value) = value.as_ref().to_str() else {
                return Err(Error::InvalidValue {
                    key: key.to_string(),
                    reason: "environment value is not valid UTF-8".to_string(),
                });
            };
            debug!("Config key {key} overridden from environment");
            self.entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
