use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{error, server};

pub async fn serve() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("okbo=info,tower_http=info")),
        )
        .init();

    let state = Arc::new(server::AppState::from_env());
    if let Err(e) = server::start_api_server(state).await {
        error!("Server stopped: {}", e);
    }
}
