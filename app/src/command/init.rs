use std::path::PathBuf;

use advent_config::{Config, EnvFile};
use tracing::info;

/// Strategy for initializing the configuration.
///
/// Writes a template `KEY=VALUE` file at the given path and creates the
/// inputs directory it names.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = PathBuf;

    async fn execute(&self, env_file: Self::Input) -> anyhow::Result<()> {
        Config::create_template(&env_file)?;

        let template = EnvFile::load(&env_file)?;
        if let Some(dir) = template.get(advent_config::INPUTS_DIR_KEY) {
            std::fs::create_dir_all(dir)?;
            info!("Created inputs directory {dir}");
        }

        println!("✅ Created config file at: {}", env_file.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Log in to adventofcode.com and copy the value of the 'session' cookie");
        println!(
            "   2. Replace the {} placeholder in the config file",
            advent_config::SESSION_KEY
        );
        println!("   3. Run 'advent fetch <DAY>' to download an input");
        println!();
        Ok(())
    }
}
