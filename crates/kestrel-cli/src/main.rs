use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use kestrel_cli::{OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kestrel")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for aggregating web server access logs into URL latency reports",
    long_about = "Kestrel scans rotated nginx access logs (plain or gzip-compressed), \
                  aggregates per-URL request time statistics, and renders the URLs with \
                  the greatest total time into an HTML report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a single access log and print URL latency statistics
    Stats {
        /// Path to the access log (plain or .gz)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of URLs to show, ranked by total time
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Find the newest access log and render the HTML report
    Report {
        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory containing rotated access logs
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Directory reports are written into
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// HTML template carrying the $table_json placeholder
        #[arg(long)]
        template: Option<PathBuf>,

        /// Number of URLs included in the report
        #[arg(long)]
        report_size: Option<usize>,

        /// Maximum tolerated parse error rate, in percent
        #[arg(long)]
        max_error_rate: Option<f64>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::Stats { file, top } => commands::stats::execute(&file, top, cli.format),
        Commands::Report {
            config,
            log_dir,
            report_dir,
            template,
            report_size,
            max_error_rate,
        } => commands::report::execute(
            config.as_deref(),
            log_dir,
            report_dir,
            template,
            report_size,
            max_error_rate,
        ),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("kestrel_cli=debug,kestrel_core=debug")
    } else {
        EnvFilter::new("kestrel_cli=info,kestrel_core=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
