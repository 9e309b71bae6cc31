/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/
use crate::constants::{ANDROID_API_MAX, ANDROID_API_MIN, APP_VERSION, CLIENT_PLATFORM};
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static PROCESS_IDENTITY: Lazy<ClientIdentity> = Lazy::new(ClientIdentity::generate);

/// Synthetic mobile client identity carried in the `Custom-User-Agent`
/// header of every request.
///
/// The portal only talks to clients that look like its official mobile
/// application, so the header mimics the app's fingerprint: application
/// version, a device UUID, the platform, an Android API level and an
/// installation UUID. The value is immutable once built; construct it
/// explicitly with [`ClientIdentity::from_parts`] when a deterministic
/// fingerprint is needed, or share the per-process one via
/// [`process_identity`].
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// Full `Custom-User-Agent` header value
    pub user_agent: String,
}

impl ClientIdentity {
    /// Builds an identity from explicit parts
    pub fn from_parts(device_id: Uuid, android_api: u8, installation_id: Uuid) -> Self {
        let user_agent = format!(
            "Patient Portal; {APP_VERSION}; {device_id}; {CLIENT_PLATFORM}; {android_api}; {installation_id}"
        );
        Self { user_agent }
    }

    /// Builds an identity with random device and installation UUIDs and a
    /// plausible Android API level
    pub fn generate() -> Self {
        let span = ANDROID_API_MAX - ANDROID_API_MIN + 1;
        let android_api = ANDROID_API_MIN + rand::random::<u8>() % span;
        Self::from_parts(Uuid::new_v4(), android_api, Uuid::new_v4())
    }

    /// Returns the `Custom-User-Agent` header value
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Returns the identity generated once for this process and reused by
/// every client that does not inject its own
pub fn process_identity() -> &'static ClientIdentity {
    &PROCESS_IDENTITY
}
