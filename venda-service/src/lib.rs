pub mod error;
pub mod service;

pub use error::{ErrorKind, ServiceError};
pub use service::{
    AllPricesRequest, AllPricesResponse, CostRequest, CostResponse, QuoteService,
};
