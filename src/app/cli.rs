use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, warn};

use super::error::AppError;
use super::transform::TextTransform;
use crate::io::SaveMode;

/// Transform every record of a line-oriented file in parallel
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version)]
pub struct CliArgs {
    /// File to read, one record per line
    pub input: PathBuf,

    /// File to write; missing parent directories are created
    pub output: PathBuf,

    /// Worker threads; zero or negative runs with one worker
    #[arg(short, long, default_value_t = default_workers(), allow_negative_numbers = true)]
    pub workers: i64,

    /// Transform applied to every record (identity, upper, lower, trim, reverse)
    #[arg(short, long, default_value_t = TextTransform::Identity)]
    pub transform: TextTransform,

    /// Overwrite the output in place instead of renaming a temporary file over it
    #[arg(long)]
    pub direct: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn save_mode(&self) -> SaveMode {
        if self.direct {
            SaveMode::Direct
        } else {
            SaveMode::Atomic
        }
    }
}

fn default_workers() -> i64 {
    std::thread::available_parallelism()
        .map(|n| i64::try_from(n.get()).unwrap_or(i64::MAX))
        .unwrap_or(1)
}

/// Install the stderr log subscriber used by the binary
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}

/// Reusable CLI application runner that handles:
/// - Argument parsing, `--help` and usage errors
/// - Logging setup
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Exit codes (0 = success, 1 = error, 2 = usage, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Parse the process arguments and run `main_fn`, racing it against signals
    pub async fn run<F, Fut>(self, main_fn: F) -> ExitCode
    where
        F: FnOnce(CliArgs) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        ExitCode::from(self.run_with_args(std::env::args().skip(1), main_fn).await)
    }

    /// Same as [`CliApp::run`] with explicit arguments; returns the raw exit status
    pub async fn run_with_args<I, F, Fut>(self, args: I, main_fn: F) -> u8
    where
        I: IntoIterator<Item = String>,
        F: FnOnce(CliArgs) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let argv = std::iter::once(self.name.clone()).chain(args);
        let args = match CliArgs::try_parse_from(argv) {
            Ok(args) => args,
            Err(e) => {
                let _ = e.print();
                return u8::try_from(e.exit_code()).unwrap_or(2);
            }
        };

        init_logging(args.verbose);

        tokio::select! {
            result = main_fn(args) => match result {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {e}");
                    1
                }
            },
            code = wait_for_signal() => code,
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> u8 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) else {
            warn!("Failed to install signal handlers");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to install Ctrl+C handler");
            return std::future::pending().await;
        }
        eprintln!("Received Ctrl+C");
        130
    }
}
