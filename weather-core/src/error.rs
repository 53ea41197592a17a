use std::fmt;

use thiserror::Error;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a location.";
pub const STATUS_MESSAGE: &str = "Could not fetch weather. Try another location.";
pub const TRANSPORT_MESSAGE: &str = "Error fetching weather data.";

/// Features the client names but does not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    WeeklyForecast,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::WeeklyForecast => f.write_str("Weekly forecast"),
        }
    }
}

/// Everything that can end a lookup. None of these are retried.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("empty query")]
    EmptyQuery,

    #[error("request to lookup endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("lookup endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("base URL {0} cannot carry a path")]
    InvalidBaseUrl(String),

    #[error("could not decode lookup response: {0}")]
    Decode(String),

    #[error("{0}")]
    Application(String),

    #[error("{0} is not available yet")]
    Unsupported(Capability),
}

impl LookupError {
    /// Text shown to the user. Transport causes stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
            LookupError::Status { .. } => STATUS_MESSAGE.to_string(),
            LookupError::Transport(_)
            | LookupError::Decode(_)
            | LookupError::InvalidBaseUrl(_) => TRANSPORT_MESSAGE.to_string(),
            LookupError::Application(message) => message.clone(),
            LookupError::Unsupported(capability) => format!("{capability} is not available yet."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_message_is_shown_verbatim() {
        let err = LookupError::Application("No matching location found.".into());
        assert_eq!(err.user_message(), "No matching location found.");
    }

    #[test]
    fn status_message_hides_body() {
        let err = LookupError::Status { status: 500, body: "stack trace".into() };
        assert_eq!(err.user_message(), STATUS_MESSAGE);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn decode_maps_to_generic_message() {
        let err = LookupError::Decode("missing field `image`".into());
        assert_eq!(err.user_message(), TRANSPORT_MESSAGE);
    }

    #[test]
    fn unsupported_names_capability() {
        let err = LookupError::Unsupported(Capability::WeeklyForecast);
        assert_eq!(err.user_message(), "Weekly forecast is not available yet.");
    }
}
