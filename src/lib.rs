//! AI boundary of the ARM library portal: the prompt relay service that
//! holds the Gemini credential, and the client helper UI code calls.

pub mod api;
pub mod client;
pub mod config;
pub mod provider;

use std::sync::Arc;

use axum::Router;
use tracing::info;

pub use api::router;
pub use client::RelayClient;
pub use config::AppConfig;
pub use provider::{GeminiClient, MockTextGenerator, TextGenerator};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(GeminiClient::new(
            config.gemini_api_url.clone(),
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.timeout_ms,
        )))
    }
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    info!("listening on 0.0.0.0:{port}");

    axum::serve(listener, app).await.expect("server failed");
}
