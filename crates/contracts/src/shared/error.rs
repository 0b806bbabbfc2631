use thiserror::Error;

/// Ошибки обращения к TheCatAPI
///
/// Classification stays coarse: the UI only distinguishes "not found" from
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Map a non-2xx status to an error.
    pub fn from_status(status: u16, context: &str) -> Self {
        match status {
            404 => ApiError::NotFound(context.to_string()),
            _ => ApiError::Http {
                status,
                message: context.to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Text shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "The requested item could not be found.",
            ApiError::Network(_) => {
                "We're having trouble connecting to our servers. Please check your internet connection and try again."
            }
            _ => "Something went wrong while talking to the cat service. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(ApiError::from_status(404, "/images/xyz").is_not_found());
        let err = ApiError::from_status(500, "/breeds");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "/breeds".into()
            }
        );
        assert!(!err.is_not_found());
        assert!(!err.is_network());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::from_status(401, "/favourites").to_string(),
            "HTTP 401: /favourites"
        );
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }

    #[test]
    fn test_user_message_is_coarse() {
        assert_eq!(
            ApiError::Decode("x".into()).user_message(),
            ApiError::Http {
                status: 502,
                message: String::new()
            }
            .user_message()
        );
        assert_ne!(
            ApiError::Network("x".into()).user_message(),
            ApiError::NotFound("x".into()).user_message()
        );
    }
}
