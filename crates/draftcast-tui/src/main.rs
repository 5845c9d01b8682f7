// draftcast entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Build the shared HTTP client and the prediction client
// 4. Create mpsc channels
// 5. Create AppState and kick off the catalog load
// 6. Spawn app logic task
// 7. Run the TUI until the user quits
// 8. Cleanup on exit

use draftcast_core::config;
use draftcast_core::oracle::PredictionClient;
use draftcast_tui::app;
use draftcast_tui::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("draftcast starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: patch {} ({}), {} teams, oracle at {}",
        config.catalog.version,
        config.catalog.locale,
        config.teams.len(),
        config.oracle.base_url
    );

    // 3. HTTP clients
    let http = reqwest::Client::new();
    let client = PredictionClient::http(http.clone(), &config.oracle.base_url);

    // 4. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);
    let (task_tx, task_rx) = mpsc::channel(64);

    // 5. Application state; the catalog loads while the TUI comes up
    let page_size = config.ui.carousel_page_size;
    let app_state = app::AppState::new(config, http, client, task_tx);
    app_state.start_catalog_load();

    // 6. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, task_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 7. Run the TUI event loop (blocks until the user quits)
    info!("Application ready");
    if let Err(e) = tui::run(ui_rx, cmd_tx, page_size).await {
        error!("TUI error: {}", e);
    }

    // 8. Cleanup: wait for app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("draftcast shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draftcast.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draftcast_tui=info,draftcast_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
