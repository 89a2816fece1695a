//! Seed values for users who have not picked their own.

use serde::{Deserialize, Serialize};

/// Per-user defaults shared with collaborator modules.
///
/// `city` is read by the weather collaborator; it rides along in this
/// config surface but nothing in this workspace interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub city: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            city: "佛山顺德".into(),
        }
    }
}
