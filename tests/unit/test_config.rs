use luxmed_client::config::Config;
use luxmed_client::constants::REST_API_BASE_URL;
use luxmed_client::error::ConfigError;
use std::env;

// Single test so the LUXMED_* variables are never touched concurrently
#[test]
fn test_from_env_loading_and_missing_keys() {
    unsafe {
        env::set_var("LUXMED_USERNAME", "jan.kowalski");
        env::set_var("LUXMED_PASSWORD", "secret");
        env::set_var("LUXMED_LANGUAGE", "pl");
        env::remove_var("LUXMED_BASE_URL");

        let config = Config::from_env().expect("configuration should load");
        assert_eq!(config.credentials.username, "jan.kowalski");
        assert_eq!(config.credentials.password, "secret");
        assert_eq!(config.credentials.language, "pl");
        assert_eq!(config.rest_api.base_url, REST_API_BASE_URL);

        // The base URL override is the seam used by the mock server tests
        env::set_var("LUXMED_BASE_URL", "http://localhost:9999");
        let config = Config::from_env().expect("configuration should load");
        assert_eq!(config.rest_api.base_url, "http://localhost:9999");

        // A missing credential fails before any request is made
        env::remove_var("LUXMED_PASSWORD");
        match Config::from_env() {
            Err(ConfigError::MissingKey(key)) => assert_eq!(key, "LUXMED_PASSWORD"),
            other => panic!("Expected MissingKey, got {other:?}"),
        }

        env::remove_var("LUXMED_USERNAME");
        env::remove_var("LUXMED_LANGUAGE");
        env::remove_var("LUXMED_BASE_URL");
    }
}
