#![forbid(unsafe_code)]

mod cmd;
mod fetch;
mod output;
mod report;

use std::env;
use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "relnav: changelog intelligence for upgrade planning",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential logging.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (default: pretty on a TTY, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Analyze changes between two versions",
        long_about = "Fetch and/or read changelog documents, classify per-version changes, \
                      and walk the upgrade path between two versions.",
        after_help = "EXAMPLES:\n    # Online analysis against the Kubernetes changelogs\n    rn analyze --current 1.20.0 --target 1.24.0\n\n    # Offline analysis of local documents\n    rn analyze --tool docker --current 23.0.0 --target 24.0.0 \\\n        --changelog-file CHANGELOG.md --offline\n\n    # Machine-readable output\n    rn analyze --current 1.20.0 --target 1.24.0 --format json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Print the classification rule table",
        after_help = "EXAMPLES:\n    rn rules\n    rn rules --format json"
    )]
    Rules,

    #[command(about = "Generate shell completions")]
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env("RELNAV_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if quiet {
            "error"
        } else if verbose {
            "relnav=debug,info"
        } else {
            "relnav=info,warn"
        })
    });

    let format = env::var("RELNAV_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mode = OutputMode::resolve(cli.format);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, mode, &mut stdout),
        Commands::Rules => cmd::rules::run_rules(mode, &mut stdout),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "rn", &mut stdout);
            Ok(())
        }
    }
}
