mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod record;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::sync::{self, SyncCommandArgs};
use crate::config::{AppConfig, ConfigOverrides};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::acli::AcliClient;
use crate::infra::process::ProcessRunner;

#[derive(Parser)]
#[command(
    name = "rewiki",
    author,
    version,
    about = "Rewrites issue tracker descriptions into wiki markup"
)]
struct Cli {
    /// Path or name of the acli binary.
    #[arg(long, global = true)]
    acli: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat the descriptions of every matching work item.
    Sync(SyncArgs),
    /// Build a formatted description from a file (or stdin) and print it.
    Preview(InputArgs),
    /// Validate and normalise one JSON value.
    Process(InputArgs),
    /// Validate and normalise every item of a JSON array.
    Batch(InputArgs),
    /// Inspect CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct SyncArgs {
    /// Project key to search in.
    #[arg(long)]
    project: Option<String>,
    /// Issue type to select.
    #[arg(long)]
    issue_type: Option<String>,
    /// Lowest work item key to include.
    #[arg(long)]
    start_key: Option<String>,
    /// Work item keys to leave untouched (comma-separated).
    #[arg(long, value_delimiter = ',')]
    exclude: Option<Vec<String>>,
    /// Print the rebuilt descriptions instead of pushing them.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Input file; stdin when omitted or `-`.
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let acli = cli.acli;

    match cli.command {
        Commands::Sync(args) => run_sync(acli, args).await,
        Commands::Preview(args) => {
            println!("{}", cmd::preview::run(args.input).await?);
            Ok(())
        }
        Commands::Process(args) => {
            println!("{}", cmd::record::run_process(args.input).await?);
            Ok(())
        }
        Commands::Batch(args) => {
            println!("{}", cmd::record::run_batch(args.input).await?);
            Ok(())
        }
        Commands::Config(args) => {
            let config = AppConfig::load(ConfigOverrides {
                acli_program: acli,
                ..ConfigOverrides::default()
            })?;
            config_cmd::run(args.command, &config)
        }
    }
}

async fn run_sync(acli: Option<String>, args: SyncArgs) -> AppResult<()> {
    let config = AppConfig::load(ConfigOverrides {
        acli_program: acli,
        project: args.project,
        issue_type: args.issue_type,
        start_key: args.start_key,
        excluded_keys: args.exclude,
    })?;

    println!(
        "Starting description reformat for project {}...",
        config.filter.project
    );

    let issue_tracker = Arc::new(AcliClient::new(
        Arc::new(ProcessRunner),
        config.acli_program.clone(),
    ));
    let context = AppContext::new(config, issue_tracker);

    let summary = sync::run(
        &context,
        SyncCommandArgs {
            dry_run: args.dry_run,
        },
    )
    .await?;

    println!("\nCompleted processing:\n{summary}");
    Ok(())
}
