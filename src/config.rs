//! Configuration management for OkBo.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Lookups happen on demand so that the application token manager
//! reads client credentials once per refresh attempt rather than at startup.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{
    ebay::EbayError,
    management::CredentialSource,
    types::ClientCredentials,
};

pub const DEFAULT_PORT: u16 = 3007;
pub const API_SCOPE: &str = "https://api.ebay.com/oauth/api_scope";

const PROD_TOKEN_URL: &str = "https://api.ebay.com/identity/v1/oauth2/token";
const PROD_BROWSE_URL: &str = "https://api.ebay.com/buy/browse/v1/item_summary/search";
const SANDBOX_TOKEN_URL: &str = "https://api.sandbox.ebay.com/identity/v1/oauth2/token";
const SANDBOX_BROWSE_URL: &str = "https://api.sandbox.ebay.com/buy/browse/v1/item_summary/search";

/// Loads environment variables from `.env` files.
///
/// Looks for `okbo/.env` in the platform-specific local data directory
/// (creating the directory if needed), then for `.env` in the working
/// directory. Both files are optional; variables already set in the process
/// environment are never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/okbo/.env`
/// - macOS: `~/Library/Application Support/okbo/.env`
/// - Windows: `%LOCALAPPDATA%/okbo/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    dotenv::dotenv().ok();
    Ok(())
}

/// Path of the `.env` file in the local data directory.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("okbo/.env");
    path
}

/// Which eBay deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    /// Reads `EBAY_ENVIRONMENT`; anything other than `sandbox` means production.
    pub fn from_env() -> Self {
        match optional("EBAY_ENVIRONMENT").as_deref() {
            Some(v) if v.eq_ignore_ascii_case("sandbox") => Environment::Sandbox,
            _ => Environment::Production,
        }
    }

    fn client_id_var(self) -> &'static str {
        match self {
            Environment::Production => "EBAY_PROD_CLIENT_ID",
            Environment::Sandbox => "EBAY_SANDBOX_CLIENT_ID",
        }
    }

    fn client_secret_var(self) -> &'static str {
        match self {
            Environment::Production => "EBAY_PROD_CLIENT_SECRET",
            Environment::Sandbox => "EBAY_SANDBOX_CLIENT_SECRET",
        }
    }
}

/// Outbound eBay endpoints used by the token manager and the browse proxy.
#[derive(Debug, Clone)]
pub struct EbayEndpoints {
    pub token_url: String,
    pub browse_url: String,
    pub scope: String,
}

impl EbayEndpoints {
    pub fn for_environment(environment: Environment) -> Self {
        let (token_url, browse_url) = match environment {
            Environment::Production => (PROD_TOKEN_URL, PROD_BROWSE_URL),
            Environment::Sandbox => (SANDBOX_TOKEN_URL, SANDBOX_BROWSE_URL),
        };
        EbayEndpoints {
            token_url: token_url.to_string(),
            browse_url: browse_url.to_string(),
            scope: API_SCOPE.to_string(),
        }
    }

    /// Environment defaults, with `EBAY_TOKEN_URL` and `EBAY_BROWSE_URL`
    /// taking precedence when set.
    pub fn from_env() -> Self {
        let defaults = Self::for_environment(Environment::from_env());
        EbayEndpoints {
            token_url: optional("EBAY_TOKEN_URL").unwrap_or(defaults.token_url),
            browse_url: optional("EBAY_BROWSE_URL").unwrap_or(defaults.browse_url),
            scope: defaults.scope,
        }
    }
}

/// Client credentials read from the process environment on every call.
#[derive(Debug, Clone, Copy)]
pub struct EnvCredentials {
    environment: Environment,
}

impl EnvCredentials {
    pub fn new(environment: Environment) -> Self {
        EnvCredentials { environment }
    }
}

impl CredentialSource for EnvCredentials {
    fn client_credentials(&self) -> Result<ClientCredentials, EbayError> {
        Ok(ClientCredentials {
            client_id: require(self.environment.client_id_var())?,
            client_secret: require(self.environment.client_secret_var())?,
        })
    }
}

/// Returns the address the proxy server binds to.
///
/// `SERVER_ADDRESS` wins; otherwise `0.0.0.0` with `PORT` (default 3007).
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS").unwrap_or_else(|| format!("0.0.0.0:{}", port()))
}

pub fn port() -> u16 {
    optional("PORT")
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Build stamp reported by `/health`, used to confirm which deploy is live.
pub fn build_stamp() -> String {
    optional("BUILD").unwrap_or_else(|| "dev".to_string())
}

/// Base URL advertised in the OpenAPI document.
pub fn public_base_url() -> String {
    optional("PUBLIC_BASE_URL").unwrap_or_else(|| format!("http://localhost:{}", port()))
}

fn require(name: &str) -> Result<String, EbayError> {
    optional(name).ok_or_else(|| {
        EbayError::Configuration(format!("Missing {name} in environment variables"))
    })
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_endpoints_use_sandbox_host() {
        let endpoints = EbayEndpoints::for_environment(Environment::Sandbox);
        assert!(endpoints.token_url.starts_with("https://api.sandbox.ebay.com/"));
        assert!(endpoints.browse_url.starts_with("https://api.sandbox.ebay.com/"));
        assert_eq!(endpoints.scope, API_SCOPE);
    }

    #[test]
    fn test_missing_variable_is_configuration_error() {
        let err = require("OKBO_TEST_VARIABLE_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(err, EbayError::Configuration(_)));
        assert!(err.to_string().contains("OKBO_TEST_VARIABLE_THAT_IS_NEVER_SET"));
    }
}
