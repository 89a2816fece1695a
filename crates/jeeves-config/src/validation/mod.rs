//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects every complaint into a single `ConfigError`, so a bad file
//! reports all its problems at once.


use crate::schema::JeevesConfig;
use jeeves_common::ConfigError;
use std::collections::HashSet;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &JeevesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_provider(&mut errors, config);
    validate_models(&mut errors, config);
    validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_provider(errors: &mut Vec<String>, config: &JeevesConfig) {
    if config.provider.base_url.trim().is_empty() {
        errors.push("provider.base_url must not be empty".into());
    }
    validate_range(
        errors,
        "provider.request_timeout_secs",
        config.provider.request_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "provider.connect_timeout_secs",
        config.provider.connect_timeout_secs,
        1,
        120,
    );
    if config.provider.max_tokens == 0 {
        errors.push("provider.max_tokens must be at least 1".into());
    }
    validate_range_f64(
        errors,
        "provider.temperature",
        config.provider.temperature,
        0.0,
        2.0,
    );
}

fn validate_models(errors: &mut Vec<String>, config: &JeevesConfig) {
    if config.models.allowed.is_empty() {
        errors.push("models.allowed must list at least one model".into());
    } else if !config.models.allowed.contains(&config.models.default) {
        errors.push(format!(
            "models.default '{}' is not in models.allowed",
            config.models.default
        ));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for model in &config.models.allowed {
        if model.trim().is_empty() {
            errors.push("models.allowed contains an empty model id".into());
        } else if !seen.insert(model.as_str()) {
            errors.push(format!("models.allowed lists '{model}' more than once"));
        }
    }
}

fn validate_chat(errors: &mut Vec<String>, config: &JeevesConfig) {
    validate_range(
        errors,
        "chat.max_history_turns",
        u64::from(config.chat.max_history_turns),
        1,
        200,
    );
}

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
