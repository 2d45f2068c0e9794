//! pokesearch binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use clap::Parser;
use pokesearch::args::{self, Args};
use pokesearch::sources::{ApiService, HttpFetcher};
use pokesearch::{app, theme};

/// Log timestamp formatter: local time as `YYYY-MM-DD-T HH:MM:SS`.
struct PokesearchTimer;

impl tracing_subscriber::fmt::time::FormatTime for PokesearchTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `<config>/logs/pokesearch.log`; falls back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("pokesearch.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PokesearchTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PokesearchTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = theme::settings();
    let fetcher = match HttpFetcher::new(&settings) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let api = Arc::new(ApiService::new(Arc::new(fetcher), &settings));

    if let Some(query) = &cli.search {
        std::process::exit(args::search::handle_search(&api, query, cli.json).await);
    }
    if let Some([kind, id]) = cli.details.as_deref() {
        std::process::exit(args::details::handle_details(&api, kind, id, cli.json).await);
    }

    tracing::info!("pokesearch starting");
    if let Err(err) = app::run(settings, api).await {
        tracing::error!(error = ?err, "application error");
        eprintln!("pokesearch: {err}");
        std::process::exit(1);
    }
    tracing::info!("pokesearch exited");
}
