use std::path::{Path, PathBuf};

use advent_config::Config;
use tracing::{debug, info};

use crate::{Day, Error, Result};

/// Directory of saved puzzle inputs, one `NN.txt` file per day.
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.inputs_dir)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, day: Day) -> PathBuf {
        self.dir.join(day.file_name())
    }

    pub async fn exists(&self, day: Day) -> bool {
        tokio::fs::try_exists(self.path_for(day))
            .await
            .unwrap_or(false)
    }

    /// The output directory is never created here.
    pub async fn check_dir(&self) -> Result<()> {
        let is_dir = tokio::fs::metadata(&self.dir)
            .await
            .is_ok_and(|meta| meta.is_dir());
        if is_dir {
            Ok(())
        } else {
            Err(Error::MissingDirectory {
                path: self.dir.clone(),
            })
        }
    }

    /// Write `contents` as the input for `day`, replacing any previous file.
    ///
    /// The bytes go to a hidden `.NN.txt.part` sibling first and are renamed
    /// into place, so a failed write never leaves a truncated `NN.txt`.
    pub async fn save(&self, day: Day, contents: &[u8]) -> Result<PathBuf> {
        self.check_dir().await?;

        let target = self.path_for(day);
        let staging = self.dir.join(format!(".{}.part", day.file_name()));

        if let Err(source) = tokio::fs::write(&staging, contents).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(Error::Write {
                path: target,
                source,
            });
        }

        if let Err(source) = tokio::fs::rename(&staging, &target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(Error::Write {
                path: target,
                source,
            });
        }

        debug!("Renamed {} to {}", staging.display(), target.display());
        info!("Saved {} bytes to {}", contents.len(), target.display());
        Ok(target)
    }
}

/// Read a saved input as lines.
///
/// Inputs are opaque bytes: invalid UTF-8 is replaced, not rejected.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect())
}
