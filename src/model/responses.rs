/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/
use chrono::NaiveDateTime;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of a successful token response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Bearer token to present in the authorization header
    pub access_token: String,
    /// Token type reported by the portal, normally `bearer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Seconds until the token expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// One selectable entity of the reservation filters
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FilterEntry {
    /// Upstream identifier
    pub id: i64,
    /// Human readable name
    pub name: String,
}

/// Reservation filter body projected to its city list
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CitiesResponse {
    /// Cities available for booking, in portal order
    pub cities: Vec<FilterEntry>,
}

/// Reservation filter body projected to its service list
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServicesResponse {
    /// Services available for booking, in portal order
    pub services: Vec<FilterEntry>,
}

/// Reservation filter body projected to its clinic list
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClinicsResponse {
    /// Clinics available for booking, in portal order
    pub clinics: Vec<FilterEntry>,
}

/// Body of the available terms endpoint
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
pub struct AvailableTermsResponse {
    /// Appointment slots grouped by day, in portal order.
    /// The wire key is misspelled by the portal.
    #[serde(rename = "AgregateAvailableVisitTerms")]
    pub aggregate_available_visit_terms: Vec<DailyVisitTerms>,
}

impl AvailableTermsResponse {
    /// Returns the number of days carrying at least one slot
    ///
    /// # Returns
    /// Number of day groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.aggregate_available_visit_terms.len()
    }

    /// Returns true if the response contains no day groups
    ///
    /// # Returns
    /// True if empty, false otherwise
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aggregate_available_visit_terms.is_empty()
    }
}

/// One day of available appointment slots
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyVisitTerms {
    /// Date the group belongs to
    pub visit_date: VisitDate,
    /// Slots available on that day, in portal order
    pub available_visits_term_presentation: Vec<VisitTerm>,
}

/// Date header of a slot group
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisitDate {
    /// Start of the group as an ISO 8601 local timestamp
    pub start_date_time: NaiveDateTime,
}

/// One bookable appointment slot as served by the portal
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisitTerm {
    /// Presentation-ready visit hour, e.g. `08:15`
    pub formatted_visit_hour: String,
    /// Doctor taking the visit
    pub doctor: DoctorDetails,
    /// Clinic hosting the visit
    pub clinic: ClinicDetails,
}

/// Doctor details nested in a slot
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DoctorDetails {
    /// Doctor's display name
    pub name: String,
}

/// Clinic details nested in a slot
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClinicDetails {
    /// Clinic's display name
    pub name: String,
}
