use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::NAMESPACE_SEPARATOR;

/// Settings for the name-resolution passes.
///
/// Every key is optional in the TOML form; missing keys take the defaults
/// the bytecode compiler expects.
///
/// ```toml
/// fresh_prefix = "V_"
/// field_namespace = "OO"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Prefix of generated local names; the counter value is appended.
    #[serde(default = "default_fresh_prefix")]
    pub fresh_prefix: String,

    /// Reserved namespace segment holding the shared object field symbols.
    #[serde(default = "default_field_namespace")]
    pub field_namespace: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fresh_prefix: default_fresh_prefix(),
            field_namespace: default_field_namespace(),
        }
    }
}

pub fn default_fresh_prefix() -> String {
    "V_".to_string()
}

pub fn default_field_namespace() -> String {
    "OO".to_string()
}

impl ResolverConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ResolverConfig = toml::from_str(text)?;
        config.validate()?;
        log::debug!(
            "Loaded resolver config: fresh_prefix={:?}, field_namespace={:?}",
            config.fresh_prefix,
            config.field_namespace
        );
        Ok(config)
    }

    /// Checks that both configured names can appear inside canonical names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_segment("fresh_prefix", &self.fresh_prefix)?;
        check_segment("field_namespace", &self.field_namespace)
    }
}

fn check_segment(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if value.contains(NAMESPACE_SEPARATOR) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("must not contain `{}`", NAMESPACE_SEPARATOR),
        });
    }
    Ok(())
}
