use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use log::*;
use order_engine::{AddressLookupError, CatalogError, OrderIntakeError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Payload deserialization error")]
    CouldNotDeserializePayload,
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    /// The order itself is not acceptable (e.g. incomplete customer name, shipping outside France).
    #[error("{0}")]
    InvalidOrder(String),
    #[error("{0}")]
    NoRecordFound(String),
    #[error("{0}")]
    AddressNotFound(String),
    #[error("Address verification is unavailable. {0}")]
    AddressServiceError(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::CouldNotDeserializePayload => StatusCode::BAD_REQUEST,
            Self::InvalidOrder(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::AddressNotFound(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AddressServiceError(_) => StatusCode::BAD_GATEWAY,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<OrderIntakeError> for ServerError {
    fn from(e: OrderIntakeError) -> Self {
        match e {
            OrderIntakeError::InvalidCustomer | OrderIntakeError::InvalidCountry(_) => Self::InvalidOrder(e.to_string()),
            OrderIntakeError::ProductNotFound(_) => Self::NoRecordFound(e.to_string()),
            OrderIntakeError::AddressLookup(AddressLookupError::AddressNotFound) => Self::AddressNotFound(e.to_string()),
            OrderIntakeError::AddressLookup(inner) => {
                warn!("💻️ Address verification failed. {inner}");
                Self::AddressServiceError(inner.to_string())
            },
            OrderIntakeError::StoreError(inner) => inner.into(),
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(e: StoreError) -> Self {
        error!("💻️ Store error. {e}");
        Self::BackendError(e.to_string())
    }
}

impl From<CatalogError> for ServerError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::InvalidCatalog(s) => Self::ConfigurationError(format!("Invalid product catalog. {s}")),
            CatalogError::StoreError(e) => Self::InitializeError(format!("Could not load the product catalog. {e}")),
        }
    }
}
