/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 25/8/26
******************************************************************************/
use crate::error::ConfigError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable that must be present, failing with a
/// [`ConfigError::MissingKey`] naming the variable otherwise
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
///
/// # Returns
///
/// The value of the environment variable, or an error if it is not set
pub fn require_env(env_var: &str) -> Result<String, ConfigError> {
    env::var(env_var).map_err(|_| {
        error!("Missing required environment variable: {}", env_var);
        ConfigError::MissingKey(env_var.to_string())
    })
}
