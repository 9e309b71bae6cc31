/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/
use crate::config::Credentials;
use crate::constants::GRANT_TYPE_PASSWORD;
use crate::utils::id::{account_id, client_id};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Form body of the token request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct AccessTokenRequest {
    /// Username of the patient account
    pub username: String,
    /// Password of the patient account
    pub password: String,
    /// OAuth grant type, always `password`
    pub grant_type: String,
    /// Installation identifier, at most 35 characters
    pub account_id: String,
    /// Client identifier, a full UUID
    pub client_id: String,
}

impl AccessTokenRequest {
    /// Builds a token request for the given credentials.
    ///
    /// The `account_id` and `client_id` fields are generated fresh on
    /// every call, so consecutive authentications present the portal
    /// with different installation identifiers.
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            grant_type: GRANT_TYPE_PASSWORD.to_string(),
            account_id: account_id(),
            client_id: client_id(),
        }
    }
}

/// Optional query parameters of the reservation filter endpoint
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize)]
pub struct FilterParams {
    /// Restrict the filters to one city
    #[serde(rename = "filter.cityId", skip_serializing_if = "Option::is_none")]
    pub city_id: Option<i64>,
    /// Restrict the filters to one service
    #[serde(rename = "filter.serviceId", skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    /// Restrict the filters to one clinic
    #[serde(rename = "filter.clinicId", skip_serializing_if = "Option::is_none")]
    pub clinic_id: Option<i64>,
}

impl FilterParams {
    /// Parameters scoped to a single city
    pub fn for_city(city_id: i64) -> Self {
        Self {
            city_id: Some(city_id),
            ..Default::default()
        }
    }
}

/// Search filter of the available terms endpoint.
///
/// Unset optional fields are left out of the query string entirely;
/// the portal treats an absent filter as "any".
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct VisitSearchRequest {
    /// City to search in
    #[serde(rename = "filter.cityId")]
    pub city_id: i64,
    /// Service to search for
    #[serde(rename = "filter.serviceId")]
    pub service_id: i64,
    /// First day of the searched range
    #[serde(rename = "filter.fromDate")]
    pub from_date: NaiveDate,
    /// Last day of the searched range
    #[serde(rename = "filter.toDate")]
    pub to_date: NaiveDate,
    /// Optional clinic scope
    #[serde(rename = "filter.clinicId", skip_serializing_if = "Option::is_none")]
    pub clinic_id: Option<i64>,
    /// Optional doctor scope
    #[serde(rename = "filter.doctorId", skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<i64>,
}

impl VisitSearchRequest {
    /// Create a new search with just the required fields
    pub fn new(city_id: i64, service_id: i64, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            city_id,
            service_id,
            from_date,
            to_date,
            clinic_id: None,
            doctor_id: None,
        }
    }

    /// Narrow the search to a single clinic
    pub fn with_clinic(mut self, clinic_id: i64) -> Self {
        self.clinic_id = Some(clinic_id);
        self
    }

    /// Narrow the search to a single doctor
    pub fn with_doctor(mut self, doctor_id: i64) -> Self {
        self.doctor_id = Some(doctor_id);
        self
    }
}
