use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scanraster::{Engine, RenderConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RenderConfig::load_toml(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    info!(
        width = config.width,
        height = config.height,
        rasterizer = %config.rasterizer,
        mode = ?config.render_mode,
        "rendering scene"
    );

    let mut engine = Engine::from_config(&config);
    let stats = engine.render();
    info!(
        faces = stats.faces,
        pixels = stats.pixels_filled,
        skipped = stats.skipped,
        "render complete"
    );

    engine
        .save(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    Ok(())
}
