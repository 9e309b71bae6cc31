/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! Client for the LuxMed Patient Portal mobile API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Credential authentication on every operation
//! - Version-correct headers per endpoint
//! - Uniform response validation
//! - Normalization of availability data into per-day records
//!
//! # Example
//! ```ignore
//! use luxmed_client::client::LuxmedClient;
//! use luxmed_client::config::Config;
//!
//! let config = Config::from_env()?;
//! let client = LuxmedClient::new(config);
//!
//! // Each call authenticates on its own
//! let cities = client.get_cities().await?;
//! ```

use crate::auth::Auth;
use crate::config::Config;
use crate::constants::{
    API_VERSION_FILTERS, API_VERSION_VISITS, AVAILABLE_TERMS_ENDPOINT, CLIENT_PLATFORM,
    CONTENT_TYPE_JSON, HEADER_API_VERSION, HEADER_CLIENT_IDENTIFIER, HEADER_CUSTOM_USER_AGENT,
    RESERVATION_FILTER_ENDPOINT, USER_AGENT,
};
use crate::error::AppError;
use crate::identity::{ClientIdentity, process_identity};
use crate::model::requests::{FilterParams, VisitSearchRequest};
use crate::model::responses::{
    AvailableTermsResponse, CitiesResponse, ClinicsResponse, FilterEntry, ServicesResponse,
};
use crate::presentation::visits::AppointmentDay;
use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Client for the LuxMed Patient Portal mobile API
///
/// Each public operation acquires a fresh access token, issues a single
/// request and validates its outcome. Nothing is shared across calls
/// except the configuration and the client identity.
pub struct LuxmedClient {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl LuxmedClient {
    /// Creates a new client using the per-process client identity
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> Self {
        Self::with_identity(config, process_identity().clone())
    }

    /// Creates a new client presenting the given identity
    ///
    /// Useful when the fingerprint must be fixed, for instance to keep
    /// requests reproducible in tests.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `identity` - Synthetic mobile client identity to present
    pub fn with_identity(config: Config, identity: ClientIdentity) -> Self {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone(), identity));

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Retrieves the cities available for booking
    ///
    /// # Returns
    /// * `Ok(Vec<(i64, String)>)` - City id and name pairs, in portal order
    /// * `Err(AppError)` - If authentication or the request fails
    pub async fn get_cities(&self) -> Result<Vec<(i64, String)>, AppError> {
        info!("Retrieving cities from the LuxMed API");

        let response: CitiesResponse = self.fetch_filters(&FilterParams::default()).await?;

        Ok(project_entries(response.cities))
    }

    /// Retrieves the services available for booking in a city
    ///
    /// # Arguments
    /// * `city_id` - City to scope the services to
    ///
    /// # Returns
    /// * `Ok(Vec<(i64, String)>)` - Service id and name pairs, in portal order
    /// * `Err(AppError)` - If authentication or the request fails
    pub async fn get_services(&self, city_id: i64) -> Result<Vec<(i64, String)>, AppError> {
        info!("Retrieving services from the LuxMed API");

        let response: ServicesResponse = self.fetch_filters(&FilterParams::for_city(city_id)).await?;

        Ok(project_entries(response.services))
    }

    /// Retrieves the clinics available for booking in a city
    ///
    /// # Arguments
    /// * `city_id` - City to scope the clinics to
    ///
    /// # Returns
    /// * `Ok(Vec<(i64, String)>)` - Clinic id and name pairs, in portal order
    /// * `Err(AppError)` - If authentication or the request fails
    pub async fn get_clinics(&self, city_id: i64) -> Result<Vec<(i64, String)>, AppError> {
        info!("Retrieving clinics from the LuxMed API");

        let response: ClinicsResponse = self.fetch_filters(&FilterParams::for_city(city_id)).await?;

        Ok(project_entries(response.clinics))
    }

    /// Searches available appointment slots for the given filter
    ///
    /// Results come back grouped by calendar day, in the order the
    /// portal returned them; slot order within a day is preserved too.
    ///
    /// # Arguments
    /// * `request` - Search filter with city, service and date range
    ///
    /// # Returns
    /// * `Ok(Vec<AppointmentDay>)` - One entry per day with available slots
    /// * `Err(AppError)` - If authentication or the request fails
    pub async fn get_visits(
        &self,
        request: &VisitSearchRequest,
    ) -> Result<Vec<AppointmentDay>, AppError> {
        info!("Getting visits for the given search parameters");

        let response: AvailableTermsResponse = self
            .get(AVAILABLE_TERMS_ENDPOINT, API_VERSION_VISITS, request)
            .await?;

        debug!("Received {} day groups", response.len());

        Ok(response
            .aggregate_available_visit_terms
            .into_iter()
            .map(AppointmentDay::from)
            .collect())
    }

    /// Returns the identity this client presents to the portal
    pub fn identity(&self) -> &ClientIdentity {
        self.auth.identity()
    }

    /// Issues a GET against the reservation filter endpoint
    async fn fetch_filters<T: DeserializeOwned>(
        &self,
        params: &FilterParams,
    ) -> Result<T, AppError> {
        self.get(RESERVATION_FILTER_ENDPOINT, API_VERSION_FILTERS, params)
            .await
    }

    /// Issues an authenticated GET request and parses its body
    async fn get<Q: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        api_version: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        let headers = self.prepare_headers(api_version).await?;
        let url = self.rest_url(endpoint);

        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .query(query)
            .send()
            .await?;

        let response = self.validate(response).await?;
        self.parse_response(response).await
    }

    /// Builds the header set of an authenticated data request
    ///
    /// Acquires a fresh access token first. The API version is a real
    /// protocol requirement of the portal: the reservation filter
    /// endpoint answers version 3.0 while visit search expects 2.0.
    async fn prepare_headers(&self, api_version: &str) -> Result<HeaderMap, AppError> {
        let token = self.auth.acquire_token().await?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::try_from(format!("Bearer {}", token.as_str()))?,
        );
        headers.insert(
            HeaderName::from_static(HEADER_API_VERSION),
            HeaderValue::from_str(api_version)?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&self.config.credentials.language)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(
            HeaderName::from_static(HEADER_CLIENT_IDENTIFIER),
            HeaderValue::from_static(CLIENT_PLATFORM),
        );
        headers.insert(
            HeaderName::from_static(HEADER_CUSTOM_USER_AGENT),
            HeaderValue::from_str(self.auth.identity().user_agent())?,
        );

        Ok(headers)
    }

    /// Ensures the portal reported success
    ///
    /// Anything other than HTTP 200 is a failure; the body is parsed as
    /// JSON and carried verbatim inside the error.
    async fn validate(&self, response: Response) -> Result<Response, AppError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            let payload: serde_json::Value = serde_json::from_str(&body)?;
            return Err(AppError::Api(payload));
        }

        Ok(response)
    }

    /// Parses a response into the desired type
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
    }

    /// Joins the base URL and an endpoint path
    fn rest_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

/// Projects filter entries to their `(id, name)` pairs, keeping order
fn project_entries(entries: Vec<FilterEntry>) -> Vec<(i64, String)> {
    entries
        .into_iter()
        .map(|entry| (entry.id, entry.name))
        .collect()
}
