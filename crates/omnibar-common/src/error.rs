use thiserror::Error;

/// Failures talking to the NLU service. None of these reach the resolution
/// engine; callers report them and skip resolution for the request.
#[derive(Debug, Error)]
pub enum NluError {
    #[error("No NLU access token configured")]
    MissingToken,

    #[error("NLU request failed: {0}")]
    Http(String),

    #[error("NLU service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode NLU response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NluError {
    /// True for failures on the remote side rather than in local setup.
    pub fn is_remote(&self) -> bool {
        !matches!(self, NluError::MissingToken)
    }
}
