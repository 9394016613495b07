use advent_fetch::{AocClient, Day, fetch_input};

use super::{ConfigInput, load_config};

/// Input parameters for the Fetch and Ensure strategies.
#[derive(Debug, Clone)]
pub struct FetchInput {
    pub day: Day,
    pub config: ConfigInput,
}

/// Strategy for downloading a day's input.
///
/// Always issues the request and overwrites any saved file, then prints the
/// path of the written file.
#[derive(Debug, Clone, Copy)]
pub struct FetchStrategy;

impl super::CommandStrategy for FetchStrategy {
    type Input = FetchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(&input.config)?;
        let client = AocClient::new(&config)?;

        let path = fetch_input(&client, &config, input.day).await?;
        println!("{}", path.display());
        Ok(())
    }
}
