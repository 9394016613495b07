#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod client;
pub mod day;
pub mod error;
pub mod store;

pub use client::AocClient;
pub use day::Day;
pub use error::{Error, Result};
pub use store::{InputStore, read_lines};

use std::path::PathBuf;

use advent_config::Config;
use async_trait::async_trait;
use tracing::{debug, info};

/// Remote that serves puzzle inputs.
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Raw body of the input for `year`/`day`.
    async fn fetch(&self, year: u16, day: Day) -> Result<Vec<u8>>;
}

/// Fetch the input for `day` and write it to `<inputs_dir>/NN.txt`.
///
/// The output directory is checked before the request so a missing
/// directory costs no network call. An existing file is overwritten.
pub async fn fetch_input<S>(source: &S, config: &Config, day: Day) -> Result<PathBuf>
where
    S: InputSource + ?Sized,
{
    let store = InputStore::from_config(config);
    store.check_dir().await?;

    info!("Fetching input for {} day {day}", config.year);
    let body = source.fetch(config.year, day).await?;
    store.save(day, &body).await
}

/// Like [`fetch_input`], but skips the request when the file already exists.
pub async fn ensure_input<S>(source: &S, config: &Config, day: Day) -> Result<PathBuf>
where
    S: InputSource + ?Sized,
{
    let store = InputStore::from_config(config);
    if store.exists(day).await {
        let path = store.path_for(day);
        debug!("Input for day {day} already at {}", path.display());
        return Ok(path);
    }

    fetch_input(source, config, day).await
}
