use tracing::info;

use super::cli::CliArgs;
use super::error::AppError;
use crate::engine::{Processor, ProcessorConfig};

/// Key the input file is loaded under
pub const INPUT_KEY: &str = "input";

/// Outcome of one command-line run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub loaded: usize,
    pub written: usize,
    pub workers: usize,
}

/// Load the input file, apply the selected transform in parallel, save the result
///
/// Blocking; the binary runs it on tokio's blocking pool.
pub fn run_pipeline(args: &CliArgs) -> Result<PipelineSummary, AppError> {
    let config = ProcessorConfig::new(args.workers).with_save_mode(args.save_mode());
    let processor = Processor::<String>::with_config(config)?;
    let workers = processor.workers();

    let loaded = processor.load_file(INPUT_KEY, &args.input)?;
    info!(
        records = loaded,
        input = %args.input.display(),
        workers,
        transform = %args.transform,
        "Loaded input"
    );

    let transform = args.transform;
    processor.map_data(INPUT_KEY, |line| transform.apply(line))?;

    let written = processor.save_data(INPUT_KEY, &args.output)?;
    info!(records = written, output = %args.output.display(), "Saved output");

    processor.dispose();
    Ok(PipelineSummary {
        loaded,
        written,
        workers,
    })
}
