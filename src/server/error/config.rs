use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set to a value that cannot be interpreted.
    ///
    /// Only raised for options that have no sensible fallback. The content-management
    /// URL is never reported here; an unusable URL is recorded on the configuration and
    /// surfaces per request instead.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },
}
