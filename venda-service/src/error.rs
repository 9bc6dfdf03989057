use serde::Serialize;
use venda_pricing::PricingError;

/// Machine-readable failure class. The HTTP layer mounting this service owns
/// the status mapping; the service only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidInput,
    UnknownMarketplace,
    UnknownKitConfig,
    Configuration,
    Repository,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("unknown marketplace: {0}")]
    UnknownMarketplace(u32),

    #[error("unknown kit config: {0}")]
    UnknownKitConfig(u32),

    #[error("pricing configuration rejected: {0}")]
    Configuration(String),

    #[error("catalog repository failure: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::InvalidInput(_) => ErrorKind::InvalidInput,
            ServiceError::UnknownMarketplace(_) => ErrorKind::UnknownMarketplace,
            ServiceError::UnknownKitConfig(_) => ErrorKind::UnknownKitConfig,
            ServiceError::Configuration(_) => ErrorKind::Configuration,
            ServiceError::Repository(_) => ErrorKind::Repository,
        }
    }
}

impl From<PricingError> for ServiceError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidCost(_)
            | PricingError::InvalidPrice(_)
            | PricingError::InvalidKitMultiplier
            | PricingError::InvalidMargin(_) => ServiceError::InvalidInput(err.to_string()),
            PricingError::UnknownMarketplace(id) => ServiceError::UnknownMarketplace(id),
            PricingError::Configuration { .. } => ServiceError::Configuration(err.to_string()),
        }
    }
}
