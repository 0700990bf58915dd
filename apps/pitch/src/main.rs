use std::io::Write;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pitch::config::Config;
use pitch::{HtmlRenderer, Page, PageConstants, PageRenderer};

fn main() -> Result<()> {
    // Load configuration first (fails on missing PITCH_CONFIG)
    let config = Config::from_env(std::env::args().nth(1))?;

    // Initialize structured logging on stderr; stdout may carry the page
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting pitch v{}", env!("CARGO_PKG_VERSION"));

    let page = Page::load(&config.config_path).map_err(|e| {
        error!(
            code = e.code(),
            authoring = e.is_authoring_error(),
            "Page construction failed: {e}"
        );
        e
    })?;

    let html = HtmlRenderer.render(&page, &PageConstants::default())?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
        }
    }

    Ok(())
}
