/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/

//! # LuxMed Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types
//! from the LuxMed client library. By importing this prelude, you get access to
//! all the essential components needed for most interactions with the Patient
//! Portal mobile API.
//!
//! ## Usage
//!
//! ```rust
//! use luxmed_client::prelude::*;
//!
//! // Now you have access to all the commonly used types
//! let identity = ClientIdentity::generate();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the LuxMed API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ConfigError, LuxmedResult};

// ============================================================================
// AUTHENTICATION AND CLIENT IDENTITY
// ============================================================================

/// Authentication handler for the LuxMed API
pub use crate::auth::{AccessToken, Auth};

/// Synthetic mobile client identity
pub use crate::identity::{ClientIdentity, process_identity};

// ============================================================================
// CLIENT
// ============================================================================

/// High level client for the Patient Portal mobile API
pub use crate::client::LuxmedClient;

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Request models for API calls
pub use crate::model::requests::{AccessTokenRequest, FilterParams, VisitSearchRequest};

// ============================================================================
// RESPONSE MODELS
// ============================================================================

/// Wire-shape response models
pub use crate::model::responses::{
    AccessTokenResponse, AvailableTermsResponse, CitiesResponse, ClinicDetails, ClinicsResponse,
    DailyVisitTerms, DoctorDetails, FilterEntry, ServicesResponse, VisitDate, VisitTerm,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Presentation layer types for data display
pub use crate::presentation::visits::{AppointmentDay, AppointmentSlot};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Identifier generation utilities
pub use crate::utils::id::{account_id, client_id};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::{NaiveDate, NaiveDateTime};
