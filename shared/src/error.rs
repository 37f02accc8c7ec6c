use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capabilities::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchErrorKind {
    Transport,
    HttpStatus,
    Schema,
    Decode,
}

impl FetchErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Transport => "TRANSPORT_ERROR",
            Self::HttpStatus => "HTTP_STATUS",
            Self::Schema => "INVALID_DATA",
            Self::Decode => "DECODE_ERROR",
        }
    }
}

/// Why a list fetch ended in `Failure`.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("HTTP error {status}")]
    HttpStatus { status: u16 },

    #[error("invalid data: {reason}")]
    Schema { reason: String },

    #[error("cannot decode `{field}` of item {item_id}: {reason}")]
    Decode {
        item_id: String,
        field: String,
        reason: String,
    },
}

impl FetchError {
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema {
            reason: reason.into(),
        }
    }

    pub fn decode(
        item_id: impl ToString,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Decode {
            item_id: item_id.to_string(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Transport { .. } => FetchErrorKind::Transport,
            Self::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            Self::Schema { .. } => FetchErrorKind::Schema,
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// The single message a screen shows for this failure. `noun` names what
    /// the screen lists ("posts", "articles", ...).
    #[must_use]
    pub fn user_message(&self, noun: &str) -> String {
        match self {
            Self::HttpStatus { status } => format!("Error {status}: Failed to fetch {noun}"),
            Self::Schema { .. } | Self::Decode { .. } => "Invalid data from API.".into(),
            Self::Transport { message } if !message.trim().is_empty() => message.clone(),
            Self::Transport { .. } => format!("Failed to fetch {noun}."),
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Transport { message } => Self::Transport { message },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {field}: {source}")]
    Url {
        field: &'static str,
        #[source]
        source: HttpError,
    },

    #[error("invalid default header: {0}")]
    Header(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_carries_code() {
        let e = FetchError::HttpStatus { status: 500 };
        assert_eq!(e.user_message("posts"), "Error 500: Failed to fetch posts");
        assert_eq!(e.status(), Some(500));
        assert_eq!(e.code(), "HTTP_STATUS");
    }

    #[test]
    fn test_schema_and_decode_share_invalid_data_message() {
        let schema = FetchError::schema("missing `data` array");
        let decode = FetchError::decode(7, "images", "EOF while parsing");
        assert_eq!(schema.user_message("posts"), "Invalid data from API.");
        assert_eq!(decode.user_message("posts"), "Invalid data from API.");
        assert_ne!(schema.kind(), decode.kind());
    }

    #[test]
    fn test_transport_message_falls_back_to_noun() {
        let blank = FetchError::Transport {
            message: "  ".into(),
        };
        assert_eq!(blank.user_message("articles"), "Failed to fetch articles.");

        let offline = FetchError::Transport {
            message: "Network request failed".into(),
        };
        assert_eq!(offline.user_message("articles"), "Network request failed");
    }

    #[test]
    fn test_http_error_maps_to_transport() {
        let e: FetchError = HttpError::Transport {
            message: "dns".into(),
        }
        .into();
        assert_eq!(e.kind(), FetchErrorKind::Transport);
    }
}
