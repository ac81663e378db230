//! tasktriage
//!
//! Classifies free-text developer requests into a task category with a
//! confidence score, complexity, priority and suggestions.
//!
//! Profiles are rule tables: the built-in `task_types`, `bug_categories` and
//! `error_types`, plus any YAML files named in the config or with `--rules`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::{self, Write};
use std::path::PathBuf;
use tasktriage_classifiers::{ClassificationHistory, ClassifierRegistry};
use tracing::{info, warn};

mod config;
mod output;
mod session;

use config::{CliConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "tasktriage")]
#[command(about = "Classify developer requests into task categories", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./tasktriage.yaml when present)
    #[arg(short, long, env = "TASKTRIAGE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Profile to classify with
    #[arg(short, long, env = "TASKTRIAGE_PROFILE", global = true)]
    profile: Option<String>,

    /// Rule table file registered as a profile and selected
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Only report secondary categories with a non-zero score
    #[arg(long, global = true)]
    strict_secondaries: bool,

    /// Number of results kept by an interactive session
    #[arg(long, global = true)]
    history: Option<usize>,

    /// Print Prometheus metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one request
    Classify {
        /// Request text; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Classify each line read from stdin
    Interactive,

    /// List registered profiles and their categories
    Profiles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref(), &cli)?;
    info!("Configuration loaded successfully");
    info!("Profile: {}", config.profile);
    info!("Secondary mode: {:?}", config.secondary_mode);

    let metrics_handle = if cli.metrics { Some(init_metrics()?) } else { None };

    let outcome = run(&cli, &config);
    report_metrics(metrics_handle.as_ref(), outcome, &mut io::stderr())
}

/// Write the metrics snapshot, on failure as well as success, then pass the
/// outcome through
fn report_metrics<T>(
    handle: Option<&PrometheusHandle>,
    outcome: Result<T>,
    out: &mut impl Write,
) -> Result<T> {
    if let Some(handle) = handle {
        if let Err(e) = write!(out, "{}", handle.render()) {
            warn!("Failed to write metrics: {}", e);
        }
    }
    outcome
}

fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let registry = build_registry(config)?;
    info!("Registered profiles: {}", registry.names().join(", "));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Classify { text } => {
            let classifier = registry.get(&config.profile)?;
            let result = classifier.classify(&text.join(" "))?;
            writeln!(out, "{}", output::render(&result, config.format)?)?;
        }
        Command::Interactive => {
            let classifier = registry.get(&config.profile)?;
            let mut history = ClassificationHistory::new(config.history_capacity);
            info!(
                "Reading requests from stdin (history capacity {})",
                history.capacity()
            );
            session::run(
                classifier.as_ref(),
                &mut history,
                config.format,
                io::stdin().lock(),
                &mut out,
            )?;
        }
        Command::Profiles => {
            let mut profiles = Vec::new();
            for name in registry.names() {
                profiles.push((name.to_string(), registry.get(name)?.category_info()));
            }
            write!(out, "{}", output::render_profiles(&profiles, config.format)?)?;
        }
    }

    Ok(())
}

/// Built-in profiles plus configured rule files, all validated up front
fn build_registry(config: &CliConfig) -> Result<ClassifierRegistry> {
    let mut registry = ClassifierRegistry::new().with_secondary_mode(config.secondary_mode);
    registry.load_builtin_profiles()?;

    for file in &config.profiles {
        registry.register_file(&file.name, &file.path)?;
    }

    // Fail before reading any input if the selected profile is unknown
    registry.get(&config.profile)?;

    Ok(registry)
}

/// Initialize tracing/logging
///
/// Logs go to stderr so JSON on stdout stays parseable.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("tasktriage=debug,tasktriage_classifiers=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tasktriage=info,tasktriage_classifiers=info")
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Initialize metrics recorder and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "tasktriage_classifications_total",
        "Total number of classifications by profile and primary category"
    );
    metrics::describe_histogram!(
        "tasktriage_classification_latency_us",
        metrics::Unit::Microseconds,
        "Classification latency in microseconds by profile"
    );

    info!("Metrics recorder initialized");
    Ok(handle)
}
