pub mod engine;
pub mod quote;

pub use engine::{PricingEngine, PricingError};
pub use quote::{KitPrice, PriceQuote};
