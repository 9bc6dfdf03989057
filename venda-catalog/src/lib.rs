pub mod builtin;
pub mod catalog;
pub mod kit;
pub mod marketplace;
pub mod shipping;

pub use catalog::{Catalog, CatalogError};
pub use kit::{KitConfig, KitDefinition};
pub use marketplace::{Marketplace, PriceAdjustment};
pub use shipping::{ShippingSchedule, ShippingTier};
