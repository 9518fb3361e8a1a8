use std::process::ExitCode;

use dataproc::prelude::*;
use dataproc::app::run_pipeline;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    CliApp::new("dataproc").run(run_file_pipeline).await
}

/// Main application logic - loads, transforms and saves one file
async fn run_file_pipeline(args: CliArgs) -> Result<(), AppError> {
    // Processor operations block, so keep them off the async workers
    let summary = tokio::task::spawn_blocking(move || run_pipeline(&args)).await??;

    info!(
        loaded = summary.loaded,
        written = summary.written,
        workers = summary.workers,
        "Pipeline finished"
    );
    Ok(())
}
