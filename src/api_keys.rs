use reqwest::Client;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, warn};

use crate::tmdb::TMDB_BASE_URL;

/// Environment variable that overrides the keychain-stored token (dev mode).
pub const TOKEN_ENV_VAR: &str = "TMDB_API_TOKEN";

#[derive(Error, Debug)]
pub enum ApiKeyError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API token is invalid")]
    InvalidToken,
    #[error("API token not found")]
    NotFound,
}

pub struct ApiKeyManager {
    entry: keyring::Entry,
}

// Global instance - created once and reused
static API_KEY_MANAGER: OnceLock<ApiKeyManager> = OnceLock::new();

fn get_manager() -> Result<&'static ApiKeyManager, ApiKeyError> {
    match API_KEY_MANAGER.get() {
        Some(manager) => Ok(manager),
        None => {
            let manager = ApiKeyManager::new()?;
            match API_KEY_MANAGER.set(manager) {
                Ok(()) => Ok(API_KEY_MANAGER.get().unwrap()),
                Err(_) => {
                    // Someone else initialized it first, use theirs
                    Ok(API_KEY_MANAGER.get().unwrap())
                }
            }
        }
    }
}

impl ApiKeyManager {
    pub fn new() -> Result<Self, ApiKeyError> {
        let entry = keyring::Entry::new("flick", "tmdb_api_token")?;
        Ok(Self { entry })
    }

    /// Store the TMDB API token in the system keychain.
    pub fn store_token(&self, token: &str) -> Result<(), ApiKeyError> {
        self.entry.set_password(token)?;
        info!("Stored TMDB API token in keychain");
        Ok(())
    }

    /// Retrieve the TMDB API token. The environment variable wins over the
    /// keychain so dev setups work without a stored credential.
    pub fn get_token(&self) -> Result<String, ApiKeyError> {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                return Ok(token);
            }
        }

        match self.entry.get_password() {
            Ok(token) => Ok(token),
            Err(keyring::Error::NoEntry) => Err(ApiKeyError::NotFound),
            Err(e) => {
                warn!("Error retrieving API token from keyring: {}", e);
                Err(ApiKeyError::Keyring(e))
            }
        }
    }

    /// Delete the stored token.
    pub fn delete_token(&self) -> Result<(), ApiKeyError> {
        self.entry.delete_credential()?;
        Ok(())
    }

    /// Validate that a token is accepted by the catalog API.
    pub async fn validate_token(&self, token: &str) -> Result<bool, ApiKeyError> {
        let client = Client::new();
        let url = format!("{}/authentication", TMDB_BASE_URL);

        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status().as_u16() {
            200 => Ok(true),
            401 => Ok(false),
            _ => Err(ApiKeyError::Network(
                response.error_for_status().unwrap_err(),
            )),
        }
    }

    /// Validate a token against the live API, then store it.
    pub async fn set_and_validate_token(&self, token: &str) -> Result<(), ApiKeyError> {
        if !self.validate_token(token).await? {
            return Err(ApiKeyError::InvalidToken);
        }
        self.store_token(token)?;
        Ok(())
    }

    /// Check if a token is available (without validating it).
    pub fn has_token(&self) -> bool {
        self.get_token().is_ok()
    }
}

pub fn retrieve_api_token() -> Result<String, ApiKeyError> {
    get_manager()?.get_token()
}

pub fn remove_api_token() -> Result<(), ApiKeyError> {
    get_manager()?.delete_token()
}

pub async fn validate_and_store_api_token(token: &str) -> Result<(), ApiKeyError> {
    get_manager()?.set_and_validate_token(token).await
}

pub fn check_api_token_exists() -> bool {
    get_manager().map(|m| m.has_token()).unwrap_or(false)
}
