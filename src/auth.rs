/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Authentication module for the LuxMed Patient Portal API
//!
//! Exchanges the configured credentials for a short-lived bearer token.
//! Every authentication presents freshly generated account and client
//! identifiers, so the portal sees each exchange as a new installation
//! of its mobile application. Tokens are not cached or refreshed: each
//! data operation performs its own exchange.

use crate::config::Config;
use crate::constants::{
    API_VERSION_VISITS, CLIENT_PLATFORM, CONTENT_TYPE_FORM, HEADER_API_VERSION,
    HEADER_CLIENT_IDENTIFIER, HEADER_CUSTOM_USER_AGENT, TOKEN_ENDPOINT, USER_AGENT,
};
use crate::error::AppError;
use crate::identity::ClientIdentity;
use crate::model::requests::AccessTokenRequest;
use crate::model::responses::AccessTokenResponse;
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Bearer token issued by the token endpoint
///
/// Scoped to the headers of a single request; never persisted and
/// never reused across operations.
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns the raw token string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Authentication manager for the LuxMed Patient Portal API
pub struct Auth {
    config: Arc<Config>,
    identity: ClientIdentity,
    client: Client,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `identity` - Synthetic mobile client identity to present
    pub fn new(config: Arc<Config>, identity: ClientIdentity) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            identity,
            client,
        }
    }

    /// Exchanges the configured credentials for a fresh access token
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - Token to present as a bearer credential
    /// * `Err(AppError)` - If the portal rejects the exchange
    pub async fn acquire_token(&self) -> Result<AccessToken, AppError> {
        info!("Retrieving an access token from the LuxMed API");

        let url = format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            TOKEN_ENDPOINT
        );
        let body = AccessTokenRequest::new(&self.config.credentials);

        debug!("Sending token request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header(HEADER_API_VERSION, API_VERSION_VISITS)
            .header(ACCEPT_LANGUAGE, &self.config.credentials.language)
            .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
            .header(HEADER_CLIENT_IDENTIFIER, CLIENT_PLATFORM)
            .header(HEADER_CUSTOM_USER_AGENT, self.identity.user_agent())
            .form(&body)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Authentication failed with status {}: {}", status, body);
            let payload: serde_json::Value = serde_json::from_str(&body)?;
            return Err(AppError::Authentication(payload));
        }

        let token: AccessTokenResponse = response.json().await?;

        info!("✓ The access token has been successfully retrieved");
        Ok(AccessToken(token.access_token))
    }

    /// Returns the identity presented by this authenticator
    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }
}
