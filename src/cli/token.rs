use std::sync::Arc;

use crate::{
    Res, config, error, info,
    server::AppState,
    success, utils,
};

/// Name of the `.env` entry written by `okbo token --save`.
pub const TOKEN_ENV_KEY: &str = "EBAY_APP_ACCESS_TOKEN";

pub async fn token(save: bool) {
    let state = Arc::new(AppState::from_env());

    let pb = super::search::spinner("Fetching application token...");
    let result = state.tokens.get_valid_token().await;
    pb.finish_and_clear();

    let token = match result {
        Ok(token) => token,
        Err(e) => error!("Token fetch failed: {}", e),
    };

    let record = state.tokens.current_token().await;
    success!("Application token: {}", utils::mask_token(&token));
    info!("Valid until {}", record.expires_at);

    if save {
        match persist(&token).await {
            Ok(path) => success!("Saved {} to {}", TOKEN_ENV_KEY, path),
            Err(e) => error!("Failed to save token: {}", e),
        }
    }
}

async fn persist(token: &str) -> Res<String> {
    let path = config::env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let current = if path.is_file() {
        async_fs::read_to_string(&path).await?
    } else {
        String::new()
    };

    async_fs::write(&path, utils::upsert_env_line(&current, TOKEN_ENV_KEY, token)).await?;
    Ok(path.display().to_string())
}
