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

//! Configuration for the puzzle input fetcher.
//!
//! The on-disk format is a plain `KEY=VALUE` file (see [`EnvFile`]); the
//! typed [`Config`] built from it is passed explicitly to the fetcher.

mod env_file;
mod error;
mod schema;

pub use env_file::EnvFile;
pub use error::{Error, Result};
pub use schema::{
    BASE_URL_KEY, Config, INPUTS_DIR_KEY, SESSION_KEY, TIMEOUT_KEY, USER_AGENT_KEY, YEAR_KEY,
    latest_event_year,
};
