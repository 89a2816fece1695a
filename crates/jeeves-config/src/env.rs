//! Environment variable overrides.
//!
//! Deployment secrets stay out of the config file: a small set of
//! `JEEVES_*` variables override the loaded file. Overrides are applied
//! before validation, so a bad override fails loudly at startup.

use crate::schema::JeevesConfig;
use tracing::debug;

pub const ENV_BASE_URL: &str = "JEEVES_BASE_URL";
pub const ENV_API_KEY: &str = "JEEVES_API_KEY";
pub const ENV_DEFAULT_MODEL: &str = "JEEVES_DEFAULT_MODEL";
pub const ENV_DEFAULT_CITY: &str = "JEEVES_DEFAULT_CITY";

/// Apply `JEEVES_*` overrides from the process environment.
pub fn apply_env_overrides(config: &mut JeevesConfig) {
    apply_overrides_from(config, |name| std::env::var(name).ok());
}

/// Apply overrides from a caller-supplied lookup.
///
/// The lookup indirection keeps this testable without mutating the
/// process environment.
pub fn apply_overrides_from<F>(config: &mut JeevesConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied: Vec<&str> = Vec::new();

    if let Some(url) = lookup(ENV_BASE_URL) {
        config.provider.base_url = url;
        applied.push(ENV_BASE_URL);
    }
    if let Some(key) = lookup(ENV_API_KEY) {
        config.provider.api_key = key;
        applied.push(ENV_API_KEY);
    }
    if let Some(model) = lookup(ENV_DEFAULT_MODEL) {
        config.models.default = model;
        applied.push(ENV_DEFAULT_MODEL);
    }
    if let Some(city) = lookup(ENV_DEFAULT_CITY) {
        config.defaults.city = city;
        applied.push(ENV_DEFAULT_CITY);
    }

    if !applied.is_empty() {
        debug!(?applied, "environment overrides applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars = lookup_from(&[
            (ENV_BASE_URL, "http://192.168.1.20:8045/v1"),
            (ENV_API_KEY, "sk-test"),
            (ENV_DEFAULT_MODEL, "claude-sonnet-4-5"),
            (ENV_DEFAULT_CITY, "Porto"),
        ]);

        let mut config = JeevesConfig::default();
        apply_overrides_from(&mut config, |name| vars.get(name).cloned());

        assert_eq!(config.provider.base_url, "http://192.168.1.20:8045/v1");
        assert_eq!(config.provider.api_key, "sk-test");
        assert_eq!(config.models.default, "claude-sonnet-4-5");
        assert_eq!(config.defaults.city, "Porto");
    }

    #[test]
    fn missing_variables_leave_config_untouched() {
        let mut config = JeevesConfig::default();
        let before = config.clone();
        apply_overrides_from(&mut config, |_| None);

        assert_eq!(config.provider.base_url, before.provider.base_url);
        assert_eq!(config.provider.api_key, before.provider.api_key);
        assert_eq!(config.models.default, before.models.default);
        assert_eq!(config.defaults.city, before.defaults.city);
    }

    #[test]
    fn partial_overrides_apply_independently() {
        let vars = lookup_from(&[(ENV_API_KEY, "sk-only-key")]);

        let mut config = JeevesConfig::default();
        apply_overrides_from(&mut config, |name| vars.get(name).cloned());

        assert_eq!(config.provider.api_key, "sk-only-key");
        assert_eq!(config.provider.base_url, "http://127.0.0.1:8045/v1");
        assert_eq!(config.models.default, "gemini-3-flash");
    }
}
