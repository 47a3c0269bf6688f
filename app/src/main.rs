//! `mym-search [config-path]`
//!
//! Loads the dataset named in the config, then treats every stdin line as the
//! current value of the search box and writes the rendered table to stdout.

use anyhow::{Context, Result};
use mym_app::{InputEvent, SearchController};
use mym_core::loader::DatasetLoader;
use mym_core::types::config::AppConfig;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| AppConfig::path(Path::new(".")));
    let config = load_config(&config_path)?;

    let base_dir = config_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let loader = DatasetLoader::for_endpoint(&config.dataset.endpoint, base_dir);

    let mut controller = SearchController::new(&config);
    controller
        .initialize(&loader)
        .await
        .with_context(|| format!("failed to initialize from {}", loader.location()))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        controller.on_input(&InputEvent::new(line));
        stdout.write_all(controller.table().to_html().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("input closed, exiting");
    Ok(())
}

fn load_config(path: &Path) -> Result<AppConfig> {
    let config = AppConfig::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        warn!(%error, "invalid config value, using default");
    }
    Ok(config.with_defaults_for_invalid())
}
