//! Configuration error types.

/// Errors that can occur when loading, saving, or parsing settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the settings file to disk.
    #[error("failed to write settings: {0}")]
    Write(#[source] std::io::Error),

    /// Failed to parse TOML content.
    #[error("failed to parse settings: {0}")]
    Parse(#[source] toml::de::Error),

    /// Failed to serialize settings to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] toml::ser::Error),
}
