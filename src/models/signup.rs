use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters shared by signup and unregister
#[derive(Debug, Clone, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SignupParams {
    /// Student email. Only its presence is checked.
    pub email: String,
}

impl SignupParams {
    /// Pick `email` out of decoded query pairs. A repeated key keeps its
    /// last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Option<Self> {
        pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .last()
            .map(|(_, email)| Self { email })
    }
}

/// Confirmation returned by a successful signup or unregister
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name),
        }
    }

    pub fn unregistered(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", email, activity_name),
        }
    }
}

/// Error body for every client and server error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
