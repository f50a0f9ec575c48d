//! RTT client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from the RTT HTTP client.
#[derive(Debug)]
pub enum RttError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Response parsed but contained invalid data
    Data(ConversionError),

    /// Station code not recognised by RTT
    StationNotFound(String),

    /// Service not found for the given UID and date
    ServiceNotFound,

    /// Rate limited by the API
    RateLimited,

    /// Invalid credentials
    Unauthorized,
}

impl fmt::Display for RttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RttError::Http(e) => write!(f, "HTTP error: {e}"),
            RttError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            RttError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            RttError::Data(e) => write!(f, "invalid response data: {e}"),
            RttError::StationNotFound(query) => {
                write!(f, "station not found: {query}")
            }
            RttError::ServiceNotFound => {
                write!(f, "service not found for the given UID and date")
            }
            RttError::RateLimited => write!(f, "rate limited by RTT API"),
            RttError::Unauthorized => write!(f, "unauthorized (invalid RTT credentials)"),
        }
    }
}

impl std::error::Error for RttError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RttError::Http(e) => Some(e),
            RttError::Data(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RttError {
    fn from(err: reqwest::Error) -> Self {
        RttError::Http(err)
    }
}

impl From<ConversionError> for RttError {
    fn from(err: ConversionError) -> Self {
        RttError::Data(err)
    }
}
