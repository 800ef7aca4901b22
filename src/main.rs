use ingredient_check::analysis::Analyzer;
use ingredient_check::api::AppState;
use ingredient_check::build_router;
use ingredient_check::config::AppConfig;
use ingredient_check::llm::OpenAiClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ingredient checker");

    // Load configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded");
    info!("   - Model: {}", config.llm.model);
    info!("   - Endpoint: {}", config.llm.base_url);
    info!("   - Timeout: {}s", config.llm.timeout_secs);
    info!("   - Max input: {} chars", config.analysis.max_input_length);

    // Initialize completion client
    let client = OpenAiClient::new(
        config.llm.base_url.clone(),
        config.llm.api_key()?,
        config.llm.model.clone(),
        config.llm.timeout(),
    )?;

    let state = AppState {
        analyzer: Analyzer::new(Arc::new(client)),
        max_input_length: config.analysis.max_input_length,
    };

    let app = build_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    info!("   GET  /         - Ingredient form");
    info!("   POST /process  - Analyze ingredients");
    info!("   GET  /health   - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
