use advent_fetch::{AocClient, ensure_input, read_lines};
use tracing::info;

use super::{FetchInput, load_config};

/// Strategy for making sure a day's input is on disk.
///
/// Only touches the network when the file is missing.
#[derive(Debug, Clone, Copy)]
pub struct EnsureStrategy;

impl super::CommandStrategy for EnsureStrategy {
    type Input = FetchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(&input.config)?;
        let client = AocClient::new(&config)?;

        let path = ensure_input(&client, &config, input.day).await?;
        let lines = read_lines(&path)?;
        info!("Day {} input has {} lines", input.day, lines.len());

        println!("{}", path.display());
        Ok(())
    }
}
