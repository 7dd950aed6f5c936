//! Error type for metadata operations

/// Boxed error used to carry the underlying cause of a transport failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for metadata fetch operations
///
/// Every variant is fatal to the fetch operation that produced it. Malformed
/// dates are not represented here; they degrade to `None` on the affected field.
#[derive(thiserror::Error, Debug)]
pub enum MetadataError {
    /// Missing or blank credential, or a required source property is absent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required call parameter is missing or blank
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote service could not be reached or answered with a failure status
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The response body was empty or could not be decoded
    #[error("Response error: {0}")]
    Response(String),
}

impl MetadataError {
    /// Build a transport error that wraps its cause
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        MetadataError::Transport {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Build a transport error with no underlying cause (e.g. a non-2xx status)
    pub fn transport_status(message: impl Into<String>) -> Self {
        MetadataError::Transport {
            message: message.into(),
            source: None,
        }
    }
}

/// Fail with [`MetadataError::Validation`] when a required parameter is blank
pub fn require_field(value: &str, name: &str) -> Result<(), MetadataError> {
    if value.trim().is_empty() {
        return Err(MetadataError::Validation(format!("Missing {}", name)));
    }
    Ok(())
}
