use thiserror::Error;

/// Errors raised while servicing an assist request. Every variant is caught
/// at the handler boundary and mapped to a status code plus a plain-text
/// body carrying the error message.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("{0}")]
    AgentNotConfigured(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{message}")]
    Downstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Generated PPL query not found.")]
    GeneratedQueryNotFound,

    #[error("Generated summary not found.")]
    GeneratedSummaryNotFound,

    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl AssistError {
    /// Maps a transport-level failure, keeping any HTTP status the error
    /// carries.
    pub fn transport(err: reqwest::Error) -> Self {
        AssistError::Downstream {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AssistError::AgentNotConfigured(_) | AssistError::InvalidRequest(_) => 400,
            AssistError::Downstream {
                status: Some(code), ..
            } => *code,
            _ => 500,
        }
    }
}
