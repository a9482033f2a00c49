use reqwest::StatusCode;
use thiserror::Error;

/// The city list could not be fetched or understood.
#[derive(Debug, Error)]
pub enum DirectoryLoadError {
    #[error("Failed to send request to the city directory: {0}")]
    Request(#[from] reqwest::Error),

    #[error("City directory request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse city directory JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which of the two weather requests an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Current => f.write_str("current weather"),
            Endpoint::Forecast => f.write_str("forecast"),
        }
    }
}

/// Either weather request failed, so the whole fetch failed.
#[derive(Debug, Error)]
pub enum WeatherFetchError {
    #[error("No city given")]
    EmptyCity,

    #[error("Failed to send request to OpenWeather ({endpoint}): {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("OpenWeather {endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse OpenWeather {endpoint} JSON: {source}")]
    Parse {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherFetchError {
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            WeatherFetchError::EmptyCity => None,
            WeatherFetchError::Request { endpoint, .. }
            | WeatherFetchError::Status { endpoint, .. }
            | WeatherFetchError::Parse { endpoint, .. } => Some(*endpoint),
        }
    }
}

/// Cut response bodies down before they end up in a user-facing message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
