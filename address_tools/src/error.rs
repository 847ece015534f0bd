use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AddressApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Address search request failed: {0}")]
    RequestError(String),
    #[error("Address search timed out: {0}")]
    Timeout(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("No address matched the query")]
    NoMatch,
}

impl From<reqwest::Error> for AddressApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_decode() {
            Self::JsonError(e.to_string())
        } else {
            Self::RequestError(e.to_string())
        }
    }
}
