//! Client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// URL could not be parsed, or uses a scheme other than http(s)
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Transport-level failure: connect, timeout, TLS
    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    /// Backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Backend answered 2xx but reported an application error
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Reply body could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Every configured backend refused the request
    #[error("All backends offline after {attempts} attempts")]
    AllEndpointsFailed { attempts: usize },
}

pub type ClientResult<T> = Result<T, ClientError>;
