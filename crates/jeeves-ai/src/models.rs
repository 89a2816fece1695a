//! Model catalog: the fixed, ordered allow-list users pick from.

use jeeves_common::ConfigError;
use jeeves_config::ModelsConfig;

/// One selectable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub id: String,
    pub is_default: bool,
}

/// Immutable catalog of selectable models.
///
/// Built once at startup from validated config. Lookup is exact and
/// case-sensitive: user-facing model ids are spelled one way only.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
    default_index: usize,
}

impl ModelRegistry {
    pub fn from_config(config: &ModelsConfig) -> Result<Self, ConfigError> {
        if config.allowed.is_empty() {
            return Err(ConfigError::ValidationError(
                "models.allowed must list at least one model".into(),
            ));
        }

        let default_index = config
            .allowed
            .iter()
            .position(|m| m == &config.default)
            .ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "models.default '{}' is not in models.allowed",
                    config.default
                ))
            })?;

        let models = config
            .allowed
            .iter()
            .enumerate()
            .map(|(i, id)| ModelDescriptor {
                id: id.clone(),
                is_default: i == default_index,
            })
            .collect();

        Ok(Self {
            models,
            default_index,
        })
    }

    /// Exact, case-sensitive membership test.
    pub fn is_valid(&self, model: &str) -> bool {
        self.models.iter().any(|m| m.id == model)
    }

    pub fn default_model(&self) -> &ModelDescriptor {
        &self.models[self.default_index]
    }

    /// All models, in configured order.
    pub fn descriptors(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Human-readable numbered listing with the default marked.
    pub fn summary(&self) -> String {
        let mut lines = vec!["Available models:".to_string()];
        for (i, model) in self.models.iter().enumerate() {
            let marker = if model.is_default { "*" } else { " " };
            lines.push(format!("{marker} {}. {}", i + 1, model.id));
        }
        lines.push(String::new());
        lines.push(format!("Default: {}", self.default_model().id));
        lines.push("Switch with /model <name>".to_string());
        lines.join("\n")
    }
}
