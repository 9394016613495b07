use advent_fetch::{Day, InputStore};

use super::{ConfigInput, load_config};

#[derive(Debug, Clone, Default)]
pub struct InfoInput {
    pub config: ConfigInput,
    /// Print the config as JSON instead of text
    pub json: bool,
}

/// Strategy for displaying the resolved configuration.
///
/// The session credential is always shown masked. Also lists which days
/// already have a saved input.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(&input.config)?;

        if input.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        println!("=== advent Configuration ===\n");

        println!("Session: {}", config.masked_session());
        println!("Year: {}", config.year);
        println!("Base URL: {}", config.base_url);
        println!("User Agent: {}", config.user_agent);
        println!("Timeout: {}s", config.timeout_secs);
        println!();

        let store = InputStore::from_config(&config);
        println!("Inputs Dir: {}", store.dir().display());
        if store.check_dir().await.is_err() {
            println!("  Status: missing (create it before fetching)");
            return Ok(());
        }

        let mut saved = Vec::new();
        for day in Day::all() {
            if store.exists(day).await {
                saved.push(format!("{:02}", day.number()));
            }
        }
        if saved.is_empty() {
            println!("  Saved: (none)");
        } else {
            println!("  Saved: {}", saved.join(", "));
        }

        Ok(())
    }
}
