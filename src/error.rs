use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Builds a status error, picking up the `error` field of a JSON body when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's message when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Client-side guards that stop a submission before it reaches the network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a user ID")]
    MissingUserId,

    #[error("Please enter a valid User ID (24 character MongoDB ID)")]
    InvalidUserId,

    #[error("You cannot rate yourself!")]
    SelfRating,

    #[error("Rating must be between 1 and 5, got {0}")]
    ScoreOutOfRange(u8),

    #[error("Requested {requested} but only {available} available")]
    QuantityExceedsAvailable { requested: f64, available: f64 },

    #[error("Please enter a quantity greater than zero")]
    InvalidQuantity,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Please select a valid image file")]
    NotAnImage,

    #[error("Please log in to continue")]
    NotAuthenticated,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppError {
    /// Text for an alert or inline error; validation errors speak for themselves.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Api(err) => err.user_message(fallback),
        }
    }
}
