use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use flashread::{
    config::Config,
    api::routes::create_router,
    llm::OpenAiCompleter,
    setup_logging,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let config = Config::load()?;
    let server_addr = config.server_addr;
    info!(model = %config.openai_model, timeout = ?config.completion_timeout, "Starting server on {}", server_addr);

    let completer = OpenAiCompleter::new(&config.openai_api_key, &config.openai_base_url);
    let app_state = AppState::new(config, Arc::new(completer));

    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;

    info!("FlashRead backend running on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
