mod action;
mod announce;
mod app;
mod app_state;
mod component;
mod components;
mod focus;
mod theme;
mod widgets;

use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let data_dir = pod_catalog::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = data_dir.join("podshelf.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; default to debug for app code.
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("podshelf log: {}", log_path.display());

    info!("podshelf starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let config = pod_catalog::config::Config::load().unwrap_or_default();

    // ── Load catalog, falling back to the bundled one ────────────────────────
    let catalog = match pod_catalog::catalog::load_catalog(&config.catalog.catalog_toml) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(
                "no user catalog at {} ({}); using the bundled catalog",
                config.catalog.catalog_toml.display(),
                e
            );
            pod_catalog::catalog::bundled_catalog()?
        }
    };
    info!("loaded {} podcasts", catalog.podcasts.len());

    // ── Run TUI ──────────────────────────────────────────────────────────────
    let app = app::App::new(&config, catalog);
    app.run()?;

    Ok(())
}
