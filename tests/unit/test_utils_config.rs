use luxmed_client::error::ConfigError;
use luxmed_client::utils::config::{get_env_or_default, require_env};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("MISSING_VAR");
        let result: String = get_env_or_default("MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("TEST_VAR_INT", "42");
        let result: i32 = get_env_or_default("TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("TEST_VAR_INVALID", "not_a_number");
        let result: i32 = get_env_or_default("TEST_VAR_INVALID", 99);
        assert_eq!(result, 99); // Should return default
        env::remove_var("TEST_VAR_INVALID");
    }
}

#[test]
fn test_require_env_with_existing_var() {
    unsafe {
        env::set_var("TEST_VAR_REQUIRED", "present");
        let result = require_env("TEST_VAR_REQUIRED");
        assert_eq!(result.unwrap(), "present");
        env::remove_var("TEST_VAR_REQUIRED");
    }
}

#[test]
fn test_require_env_with_missing_var() {
    unsafe {
        env::remove_var("TEST_VAR_REQUIRED_MISSING");
        let result = require_env("TEST_VAR_REQUIRED_MISSING");

        match result {
            Err(ConfigError::MissingKey(key)) => {
                assert_eq!(key, "TEST_VAR_REQUIRED_MISSING");
            }
            other => panic!("Expected MissingKey error, got {other:?}"),
        }
    }
}
