use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur when loading a resolver configuration.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text is not valid TOML or has the wrong shape.
    #[error("Invalid resolver configuration: {0}")]
    #[diagnostic(
        code(egel_source::config_parse),
        help("Check the TOML syntax and the names of the configuration keys")
    )]
    Parse(String),

    /// A configured name is not usable as an identifier segment.
    #[error("Invalid value for `{key}`: {reason}")]
    #[diagnostic(code(egel_source::config_value))]
    InvalidValue {
        key: String,
        reason: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
