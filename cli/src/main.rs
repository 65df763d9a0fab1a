//! CLI for Dependabot auto-merge.
//!
//! Approves and enables auto-merge on open Dependabot pull requests whose
//! version bumps stay within a semver-compatible range. Meant to run on a
//! schedule from a GitHub Actions workflow.

use clap::Parser;
use dependabot_auto_merge::{
    ConfigFile, GitHubHost, RunSummary, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Dependabot auto-merge - Approve and auto-merge safe Dependabot pull requests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token with pull request write access.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Repository that triggered the run, as `owner/repo`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: String,

    /// GitHub API base URL (for GitHub Enterprise Server).
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Path to an optional TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate pull requests without approving or merging them.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Both ring and aws-lc-rs may be compiled in through octocrab; pick one.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Per-pull-request failures are logged during the run and do not change
    // the exit code.
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let file = args.config.as_deref().map(ConfigFile::load).transpose()?;

    let config =
        RunnerConfig::from_context(&args.repository, file.as_ref())?.with_dry_run(args.dry_run);
    let host = GitHubHost::new(&args.token, args.api_url.as_deref())?
        .with_merge_method(file.as_ref().and_then(|f| f.merge_method));

    let runner = Runner::new(config, host);
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Organizations processed: {}",
        summary.organizations_processed
    );
    println!("  Repositories processed: {}", summary.repositories_processed);
    println!("  Pull requests listed: {}", summary.pull_requests_listed);
    println!("  Pull requests eligible: {}", summary.pull_requests_eligible);

    if summary.dry_run {
        println!("  Pull requests previewed: {}", summary.previewed);
    } else {
        println!("  Approvals submitted: {}", summary.approvals_submitted);
        println!("  Auto-merges enabled: {}", summary.auto_merges_enabled);
        println!("  Merges failed: {}", summary.merges_failed);
    }
}
