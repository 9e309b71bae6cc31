use crate::constants::ACCOUNT_ID_MAX_LEN;
use uuid::Uuid;

/// Generates the `account_id` field of a token request.
///
/// The token endpoint limits this field to 35 characters, so the
/// hyphenated UUID is truncated to fit. A fresh value is produced on
/// every call; the portal treats each authentication as coming from a
/// new installation.
///
/// # Examples
/// ```
/// use luxmed_client::utils::id::account_id;
/// let id = account_id();
/// assert!(id.len() <= 35);
/// ```
pub fn account_id() -> String {
    let mut id = Uuid::new_v4().to_string();
    id.truncate(ACCOUNT_ID_MAX_LEN);
    id
}

/// Generates the `client_id` field of a token request as a full
/// hyphenated UUID, fresh on every call.
///
/// # Examples
/// ```
/// use luxmed_client::utils::id::client_id;
/// let id = client_id();
/// assert_eq!(id.len(), 36);
/// ```
pub fn client_id() -> String {
    Uuid::new_v4().to_string()
}
