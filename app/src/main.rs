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

mod command;

use std::path::PathBuf;

use advent_fetch::Day;
use clap::{Args, Parser, Subcommand, value_parser};
use command::{
    CommandStrategy, ConfigInput, EnsureStrategy, FetchInput, FetchStrategy, InfoInput,
    InfoStrategy, InitStrategy, VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber, filter::LevelFilter};

#[derive(Parser)]
#[command(name = "advent")]
#[command(about = "Fetch Advent of Code puzzle inputs", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct ConfigArgs {
    /// KEY=VALUE config file (default: ./.env, then ~/advent/.env)
    #[arg(short = 'e', long)]
    env_file: Option<PathBuf>,

    /// Event year, overrides AOC_YEAR
    #[arg(short, long, value_parser = value_parser!(u16).range(2015..))]
    year: Option<u16>,

    /// Output directory, overrides AOC_INPUTS_DIR
    #[arg(short = 'd', long)]
    inputs_dir: Option<PathBuf>,

    /// Session cookie value, overrides AOC_SESSION_ID
    #[arg(short, long)]
    session: Option<String>,
}

impl From<ConfigArgs> for ConfigInput {
    fn from(args: ConfigArgs) -> Self {
        Self {
            env_file: args.env_file,
            year: args.year,
            inputs_dir: args.inputs_dir,
            session: args.session,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Download a day's input, overwriting any saved copy
    Fetch {
        /// Day number
        #[arg(value_parser = value_parser!(u8).range(1..=25))]
        day: u8,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Download a day's input only if it is not saved yet
    Ensure {
        /// Day number
        #[arg(value_parser = value_parser!(u8).range(1..=25))]
        day: u8,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Create a template config file
    Init {
        /// Where to write the config file
        #[arg(short = 'e', long, default_value = ".env")]
        env_file: PathBuf,
    },
    /// Show the resolved configuration
    Info {
        #[command(flatten)]
        config: ConfigArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Fetch { day, config } => {
            let input = FetchInput {
                day: Day::new(day)?,
                config: config.into(),
            };
            FetchStrategy.execute(input).await?;
        }
        Commands::Ensure { day, config } => {
            let input = FetchInput {
                day: Day::new(day)?,
                config: config.into(),
            };
            EnsureStrategy.execute(input).await?;
        }
        Commands::Init { env_file } => {
            InitStrategy.execute(env_file).await?;
        }
        Commands::Info { config, json } => {
            let input = InfoInput {
                config: config.into(),
                json,
            };
            InfoStrategy.execute(input).await?;
        }
        Commands::Version => {
            VersionStrategy.execute(()).await?;
        }
    }

    Ok(())
}
