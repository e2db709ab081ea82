use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use docmatch::{DefaultDecoder, DocMatchConfig, MatchOrchestrator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(config_path), Some(file_path)) = (args.next(), args.next()) else {
        bail!("usage: docmatch <config.yaml> <file>");
    };
    let config_path = PathBuf::from(config_path);
    let file_path = PathBuf::from(file_path);

    let config = DocMatchConfig::from_file(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let orchestrator = MatchOrchestrator::from_config(&config)?;

    let bytes = std::fs::read(&file_path)
        .with_context(|| format!("reading {}", file_path.display()))?;
    let filename = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = orchestrator.run_bytes(&filename, &bytes, &DefaultDecoder)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
