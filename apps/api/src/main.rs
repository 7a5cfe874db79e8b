mod config;
mod enhancement;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::enhancement::keyword_matcher::{KeywordConfig, KeywordMatcher};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Enhancer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_model_name.clone(),
        config.openai_base_url.clone(),
    )?;
    info!("LLM client initialized (model: {})", config.openai_model_name);

    // Initialize fit scorer (keyword overlap; threshold from KEYWORD_MIN_LENGTH)
    let fit_scorer = Arc::new(KeywordMatcher::new(KeywordConfig::with_min_length(
        config.keyword_min_length,
    )));
    info!(
        "Keyword matcher initialized (tokens longer than {} chars, {} stop-words)",
        fit_scorer.config().min_len_exclusive,
        fit_scorer.config().stop_words.len()
    );

    let state = AppState {
        llm: Arc::new(llm),
        fit_scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the deployed front end

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
