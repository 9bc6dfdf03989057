use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::kit::KitConfig;
use crate::marketplace::Marketplace;
use crate::shipping::ShippingSchedule;

/// Catalog snapshot validation failures
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate marketplace id {0}")]
    DuplicateMarketplace(u32),

    #[error("marketplace {id} has commission rate {rate} outside [0, 1)")]
    InvalidCommission { id: u32, rate: f64 },

    #[error("marketplace {0} is not covered by any shipping band")]
    UncoveredMarketplace(u32),

    #[error("marketplace {0} is covered by more than one shipping band")]
    OverlappingBands(u32),

    #[error("duplicate kit config id {0}")]
    DuplicateKitConfig(u32),

    #[error("kit '{name}' in config {config_id} has multiplier 0")]
    InvalidKitMultiplier { config_id: u32, name: String },
}

/// One immutable, versioned snapshot of the pricing configuration:
/// marketplaces, the shipping schedule, and the kit configurations.
///
/// The calculator never queries live storage; a data layer publishes a
/// snapshot per request and the whole calculation runs against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub marketplaces: Vec<Marketplace>,
    pub shipping: ShippingSchedule,
    pub kit_configs: Vec<KitConfig>,
}

impl Catalog {
    pub fn marketplace(&self, id: u32) -> Option<&Marketplace> {
        self.marketplaces.iter().find(|m| m.id == id)
    }

    pub fn kit_config(&self, id: u32) -> Option<&KitConfig> {
        self.kit_configs.iter().find(|k| k.id == id)
    }

    /// Check the snapshot invariants: unique ids, commission rates in [0, 1),
    /// every marketplace in exactly one shipping band, kit multipliers >= 1.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for marketplace in &self.marketplaces {
            if !seen.insert(marketplace.id) {
                return Err(CatalogError::DuplicateMarketplace(marketplace.id));
            }
            if marketplace.commission_rate < 0.0 || marketplace.commission_rate >= 1.0 {
                return Err(CatalogError::InvalidCommission {
                    id: marketplace.id,
                    rate: marketplace.commission_rate,
                });
            }

            let bands = [
                self.shipping.threshold.ids,
                self.shipping.flat_low.ids,
                self.shipping.flat_shopee.ids,
            ];
            match bands.iter().filter(|band| band.contains(marketplace.id)).count() {
                0 => return Err(CatalogError::UncoveredMarketplace(marketplace.id)),
                1 => {}
                _ => return Err(CatalogError::OverlappingBands(marketplace.id)),
            }
        }

        let mut seen_configs = HashSet::new();
        for config in &self.kit_configs {
            if !seen_configs.insert(config.id) {
                return Err(CatalogError::DuplicateKitConfig(config.id));
            }
            for kit in &config.kits {
                if kit.multiplier == 0 {
                    return Err(CatalogError::InvalidKitMultiplier {
                        config_id: config.id,
                        name: kit.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
