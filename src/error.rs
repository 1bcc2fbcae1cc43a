use thiserror::Error;

/// Failures talking to the Sheets/Drive backend. Handlers log these and
/// answer with the fixed 500 payload; the original error is never exposed.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("google api request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("google api returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("token exchange failed: {0}")]
    Token(String),

    #[error("invalid service account key: {0}")]
    Key(#[from] jsonwebtoken::errors::Error),
}

/// Failures on the consuming side of the two endpoints. The façade logs
/// these and reports an absence of data; callers only ever see `None`.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("server failure {code}: {message}")]
    Server { code: String, message: String },

    #[error("unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Filtering against a key no record or list carries is an explicit error,
/// not silently empty output.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown employee field: {0}")]
    UnknownField(String),

    #[error("unknown master data category: {0}")]
    UnknownCategory(String),
}
