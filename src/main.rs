use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use trust_scout::config::{Config, OutputFormat};
use trust_scout::history::AnalysisHistory;
use trust_scout::models::{AccountData, AnalysisResult};
use trust_scout::output::terminal;
use trust_scout::{input, scoring};

/// Trust Scout: fake account risk scoring.
///
/// Applies a fixed set of heuristic rules to an account's public attributes
/// and reports a 0-100 risk score, a risk level, and the rules that fired.
#[derive(Parser)]
#[command(name = "trust-scout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single account from command-line attributes
    Analyze {
        #[command(flatten)]
        account: AccountArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze every account in a JSON file (one object or an array)
    Batch {
        /// Path to the JSON file
        file: PathBuf,

        /// Print the results as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List the scoring rules and username patterns
    Rules,
}

#[derive(Args)]
struct AccountArgs {
    /// Username to analyze (without the leading @)
    #[arg(long)]
    username: String,

    /// Account age in days
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    account_age: i64,

    /// Number of followers
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    followers: i64,

    /// Number of accounts followed
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    following: i64,

    /// Bio length in characters
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(i64).range(0..))]
    bio_length: i64,

    /// The account has no profile photo
    #[arg(long)]
    no_profile_photo: bool,
}

impl From<AccountArgs> for AccountData {
    fn from(args: AccountArgs) -> Self {
        Self {
            username: args.username.trim_start_matches('@').to_string(),
            account_age: args.account_age,
            followers: args.followers,
            following: args.following,
            bio_length: args.bio_length,
            has_profile_photo: !args.no_profile_photo,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trust_scout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { account, json } => {
            let data = AccountData::from(account);
            input::validate(&data)?;

            let mut history = AnalysisHistory::new(config.history_size);
            let result = history.record(scoring::analyze(&data));

            if output_format(&config, json) == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                terminal::display_result(result);
            }
        }

        Commands::Batch { file, json } => {
            let accounts = input::load_accounts(&file)?;
            let total = accounts.len();
            let accounts = input::retain_valid(accounts);
            info!(
                valid = accounts.len(),
                skipped = total - accounts.len(),
                "Analyzing batch"
            );

            let mut history = AnalysisHistory::new(config.history_size);
            let mut results: Vec<AnalysisResult> = Vec::with_capacity(accounts.len());
            for account in &accounts {
                results.push(history.record(scoring::analyze(account)).clone());
            }

            if output_format(&config, json) == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            if results.is_empty() {
                println!("No valid accounts found in {}.", file.display());
                return Ok(());
            }

            for result in &results {
                terminal::display_result(result);
            }
            terminal::display_history(&history, Utc::now());

            if total > accounts.len() {
                println!(
                    "  {} {} invalid records skipped (see log)",
                    "Warning:".yellow(),
                    total - accounts.len()
                );
            }
        }

        Commands::Rules => {
            terminal::display_rules();
        }
    }

    Ok(())
}

/// The `--json` flag wins over the configured default.
fn output_format(config: &Config, json_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output
    }
}
