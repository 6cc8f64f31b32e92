use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files: useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup, no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let search_url = require("SMARTSURF_SEARCH_URL")?;

    let min_mutual_connections = parse_u64("SMARTSURF_MIN_MUTUAL_CONNECTIONS", "10")?;
    let settle_delay_secs = parse_u64("SMARTSURF_SETTLE_DELAY_SECS", "5")?;
    let profile_settle_secs = parse_u64("SMARTSURF_PROFILE_SETTLE_SECS", "5")?;
    let inter_profile_delay_secs = parse_u64("SMARTSURF_INTER_PROFILE_DELAY_SECS", "10")?;
    let user_data_dir = PathBuf::from(or_default("SMARTSURF_USER_DATA_DIR", "chrome-data"));
    let log_level = or_default("SMARTSURF_LOG_LEVEL", "info");

    Ok(AppConfig {
        search_url,
        min_mutual_connections,
        settle_delay_secs,
        profile_settle_secs,
        inter_profile_delay_secs,
        user_data_dir,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert(
            "SMARTSURF_SEARCH_URL",
            "https://example.com/search/results/people/?keywords=24",
        );
        m
    }

    #[test]
    fn build_app_config_fails_without_search_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SMARTSURF_SEARCH_URL"),
            "expected MissingEnvVar(SMARTSURF_SEARCH_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_applies_defaults() {
        let map = full_env();
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.min_mutual_connections, 10);
        assert_eq!(config.settle_delay_secs, 5);
        assert_eq!(config.profile_settle_secs, 5);
        assert_eq!(config.inter_profile_delay_secs, 10);
        assert_eq!(config.user_data_dir, PathBuf::from("chrome-data"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn build_app_config_honors_overrides() {
        let mut map = full_env();
        map.insert("SMARTSURF_MIN_MUTUAL_CONNECTIONS", "25");
        map.insert("SMARTSURF_SETTLE_DELAY_SECS", "2");
        map.insert("SMARTSURF_USER_DATA_DIR", "/tmp/surf-profile");
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.min_mutual_connections, 25);
        assert_eq!(config.settle_delay_secs, 2);
        assert_eq!(config.user_data_dir, PathBuf::from("/tmp/surf-profile"));
    }

    #[test]
    fn build_app_config_rejects_non_numeric_threshold() {
        let mut map = full_env();
        map.insert("SMARTSURF_MIN_MUTUAL_CONNECTIONS", "ten");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "SMARTSURF_MIN_MUTUAL_CONNECTIONS"
        ));
    }

    #[test]
    fn build_app_config_rejects_negative_delay() {
        let mut map = full_env();
        map.insert("SMARTSURF_INTER_PROFILE_DELAY_SECS", "-3");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "SMARTSURF_INTER_PROFILE_DELAY_SECS"
        ));
    }

    #[test]
    fn duration_accessors_convert_seconds() {
        let map = full_env();
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.settle_delay(), std::time::Duration::from_secs(5));
        assert_eq!(
            config.inter_profile_delay(),
            std::time::Duration::from_secs(10)
        );
    }
}
