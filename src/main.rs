use anyhow::Context;
use clap::Parser;
use narrata::{config, logging, processing::NarrationService};
use std::io::Read;
use std::path::PathBuf;

/// Summarize a PDF or plain-text document for narration.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Document to summarize (`.pdf` or `.txt`), or `-` to read text from stdin.
    input: PathBuf,

    /// Hard cap on the summary length, in characters.
    #[arg(long)]
    max_chars: Option<usize>,

    /// Per-chunk compression ratio requested from the model.
    #[arg(long)]
    target_ratio: Option<f64>,

    /// Lower length hint for recompression passes.
    #[arg(long)]
    model_min_len: Option<usize>,

    /// Fixed upper length bound for model output.
    #[arg(long)]
    model_max_len: Option<usize>,

    /// Chunk size, in characters, for model input.
    #[arg(long)]
    chunk_size: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();
    let config = config::init_config().context("Failed to load configuration")?;

    let mut options = config.summary_options();
    if let Some(max_chars) = cli.max_chars {
        options.max_chars = max_chars;
    }
    if let Some(ratio) = cli.target_ratio {
        anyhow::ensure!(
            ratio.is_finite() && ratio > 0.0,
            "--target-ratio must be a positive number"
        );
        options.target_ratio = ratio;
    }
    if let Some(min_len) = cli.model_min_len {
        options.model_min_len = min_len;
    }
    if let Some(max_len) = cli.model_max_len {
        anyhow::ensure!(max_len > 0, "--model-max-len must be greater than zero");
        options.model_max_len = Some(max_len);
    }
    if let Some(chunk_size) = cli.chunk_size {
        anyhow::ensure!(chunk_size > 0, "--chunk-size must be greater than zero");
        options.chunk_size = chunk_size;
    }

    let service = NarrationService::from_config(config)
        .context("Failed to initialize summarization client")?;

    let summary = if cli.input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        service.summarize_text(&raw, &options).await?
    } else {
        service
            .summarize_file(&cli.input, &options)
            .await
            .with_context(|| format!("Failed to summarize {}", cli.input.display()))?
    };

    println!("{summary}");
    tracing::debug!(metrics = ?service.metrics_snapshot(), "Run complete");
    Ok(())
}
