use arm_ai_relay::{router, run_server, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("arm_ai_relay=info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(model = %config.gemini_model, "starting prompt relay");

    let state = AppState::from_config(&config);
    let app = router(state);

    run_server(app, config.port).await;
}
