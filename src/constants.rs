/// Base URL of the LuxMed Patient Portal mobile API
pub const REST_API_BASE_URL: &str = "https://portalpacjenta.luxmed.pl/PatientPortalMobileAPI/api";
/// Endpoint exchanging credentials for a bearer token
pub const TOKEN_ENDPOINT: &str = "token";
/// Endpoint returning the reservation filters (cities, services, clinics)
pub const RESERVATION_FILTER_ENDPOINT: &str = "visits/available-terms/reservation-filter";
/// Endpoint returning available appointment slots for a search filter
pub const AVAILABLE_TERMS_ENDPOINT: &str = "visits/available-terms";
/// API version required by the token and visit search endpoints
pub const API_VERSION_VISITS: &str = "2.0";
/// API version required by the reservation filter endpoint
pub const API_VERSION_FILTERS: &str = "3.0";
/// OAuth grant type sent in the token request body
pub const GRANT_TYPE_PASSWORD: &str = "password";
/// Version of the official mobile application this client impersonates.
///
/// The upstream API rejects clients it does not recognize, so the
/// `Custom-User-Agent` header must carry a version string the portal
/// still accepts.
pub const APP_VERSION: &str = "3.20.5";
/// Platform identifier expected in the `x-api-client-identifier` header
pub const CLIENT_PLATFORM: &str = "Android";
/// User agent string of the HTTP stack used by the official mobile application
pub const USER_AGENT: &str = "okhttp/3.11.0";
/// Lowest Android API level advertised in the synthetic client identity
pub const ANDROID_API_MIN: u8 = 23;
/// Highest Android API level advertised in the synthetic client identity
pub const ANDROID_API_MAX: u8 = 29;
/// Maximum length of the `account_id` field accepted by the token endpoint
pub const ACCOUNT_ID_MAX_LEN: usize = 35;
/// Name of the header selecting the upstream API version
pub const HEADER_API_VERSION: &str = "api-version";
/// Name of the header carrying the synthetic mobile client identity
pub const HEADER_CUSTOM_USER_AGENT: &str = "custom-user-agent";
/// Name of the header identifying the client platform
pub const HEADER_CLIENT_IDENTIFIER: &str = "x-api-client-identifier";
/// Content type of the token request body
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
/// Content type sent with every authenticated data request
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";
