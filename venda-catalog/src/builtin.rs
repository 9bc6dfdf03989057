//! The two catalog versions the calculator has shipped with. Deployments can
//! inject their own snapshot instead; these are the historical defaults.

use crate::catalog::Catalog;
use crate::kit::{KitConfig, KitDefinition};
use crate::marketplace::{Marketplace, PriceAdjustment};
use crate::shipping::{FlatBand, IdRange, ShippingSchedule, ThresholdBand};

fn marketplace(id: u32, name: &str, commission_rate: f64) -> Marketplace {
    Marketplace {
        id,
        name: name.to_string(),
        commission_rate,
        adjustment: PriceAdjustment::None,
    }
}

fn kit_config(id: u32, name: &str, multipliers: &[u32]) -> KitConfig {
    KitConfig {
        id,
        name: name.to_string(),
        kits: multipliers
            .iter()
            .map(|&multiplier| KitDefinition {
                name: format!("Kit {}", multiplier),
                multiplier,
            })
            .collect(),
    }
}

fn default_kit_configs() -> Vec<KitConfig> {
    vec![
        kit_config(0, "Kits de 2, 3 e 6", &[2, 3, 6]),
        kit_config(1, "Kits de 4, 12 e 24", &[4, 12, 24]),
        kit_config(2, "Kits de 5, 10 e 20", &[5, 10, 20]),
        kit_config(3, "Kits de 8, 16 e 18", &[8, 16, 18]),
    ]
}

/// The first-generation 0-indexed catalog: threshold shipment 6/22, single
/// Mercado Livre listing.
pub fn legacy() -> Catalog {
    Catalog {
        version: "legacy".to_string(),
        marketplaces: vec![
            marketplace(0, "Mercado Livre", 0.12),
            marketplace(1, "Americanas", 0.16),
            marketplace(2, "Magalu", 0.18),
            marketplace(3, "Via Varejo", 0.17),
            marketplace(4, "Droga Raia", 0.22),
            marketplace(5, "Tray", 0.05),
            Marketplace {
                adjustment: PriceAdjustment::StackedSurcharge { rate: 0.10 },
                ..marketplace(6, "Tray + 20%", 0.05)
            },
            marketplace(7, "Digigrow", 0.18),
            marketplace(8, "Shopee", 0.20),
            Marketplace {
                adjustment: PriceAdjustment::Double,
                ..marketplace(9, "Shopee x2", 0.20)
            },
        ],
        shipping: ShippingSchedule {
            threshold: ThresholdBand {
                ids: IdRange::new(0, 3),
                cutoff: 78.0,
                below: 6.0,
                above: 22.0,
            },
            flat_low: FlatBand {
                ids: IdRange::new(4, 7),
                value: 1.0,
            },
            flat_shopee: FlatBand {
                ids: IdRange::new(8, 9),
                value: 4.5,
            },
        },
        kit_configs: default_kit_configs(),
    }
}

/// The current 1-indexed catalog: threshold shipment 7/27, Mercado Livre
/// split into Premium and Clássico listings.
pub fn current() -> Catalog {
    Catalog {
        version: "current".to_string(),
        marketplaces: vec![
            marketplace(1, "Mercado Livre Premium", 0.17),
            marketplace(2, "Mercado Livre Clássico", 0.12),
            marketplace(3, "Americanas", 0.16),
            marketplace(4, "Magalu", 0.18),
            marketplace(5, "Via Varejo", 0.17),
            marketplace(6, "Droga Raia", 0.22),
            marketplace(7, "Tray", 0.05),
            Marketplace {
                adjustment: PriceAdjustment::StackedSurcharge { rate: 0.10 },
                ..marketplace(8, "Tray + 20%", 0.05)
            },
            marketplace(9, "Digigrow", 0.18),
            marketplace(10, "Shopee", 0.20),
            Marketplace {
                adjustment: PriceAdjustment::Double,
                ..marketplace(11, "Shopee x2", 0.20)
            },
        ],
        shipping: ShippingSchedule {
            threshold: ThresholdBand {
                ids: IdRange::new(1, 5),
                cutoff: 78.0,
                below: 7.0,
                above: 27.0,
            },
            flat_low: FlatBand {
                ids: IdRange::new(6, 9),
                value: 1.0,
            },
            flat_shopee: FlatBand {
                ids: IdRange::new(10, 11),
                value: 4.5,
            },
        },
        kit_configs: default_kit_configs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipping::ShippingTier;

    #[test]
    fn test_builtin_catalogs_validate() {
        assert!(legacy().validate().is_ok());
        assert!(current().validate().is_ok());
    }

    #[test]
    fn test_version_labels() {
        assert_eq!(legacy().version, "legacy");
        assert_eq!(current().version, "current");
    }

    #[test]
    fn test_every_marketplace_has_a_tier() {
        for catalog in [legacy(), current()] {
            for marketplace in &catalog.marketplaces {
                assert!(
                    catalog.shipping.tier_for(marketplace.id).is_some(),
                    "{} has no shipping tier in catalog {}",
                    marketplace.name,
                    catalog.version
                );
            }
        }
    }

    #[test]
    fn test_shipment_values_come_from_the_schedule() {
        for catalog in [legacy(), current()] {
            let schedule = &catalog.shipping;
            let allowed = [
                schedule.flat_low.value,
                schedule.flat_shopee.value,
                schedule.threshold.below,
                schedule.threshold.above,
            ];
            for marketplace in &catalog.marketplaces {
                for price in [0.0, 77.99, 78.0, 500.0] {
                    let value = schedule.value_for(marketplace.id, price).unwrap();
                    assert!(allowed.contains(&value));
                }
            }
        }
    }

    #[test]
    fn test_legacy_band_boundaries() {
        let catalog = legacy();
        assert_eq!(catalog.shipping.tier_for(0), Some(ShippingTier::Threshold));
        assert_eq!(catalog.shipping.tier_for(3), Some(ShippingTier::Threshold));
        assert_eq!(catalog.shipping.tier_for(4), Some(ShippingTier::FlatLow));
        assert_eq!(catalog.shipping.tier_for(7), Some(ShippingTier::FlatLow));
        assert_eq!(catalog.shipping.tier_for(8), Some(ShippingTier::FlatShopee));
        assert_eq!(catalog.shipping.tier_for(9), Some(ShippingTier::FlatShopee));
        assert_eq!(catalog.shipping.threshold.below, 6.0);
        assert_eq!(catalog.shipping.threshold.above, 22.0);
    }

    #[test]
    fn test_current_band_boundaries() {
        let catalog = current();
        assert_eq!(catalog.shipping.tier_for(1), Some(ShippingTier::Threshold));
        assert_eq!(catalog.shipping.tier_for(5), Some(ShippingTier::Threshold));
        assert_eq!(catalog.shipping.tier_for(6), Some(ShippingTier::FlatLow));
        assert_eq!(catalog.shipping.tier_for(9), Some(ShippingTier::FlatLow));
        assert_eq!(catalog.shipping.tier_for(10), Some(ShippingTier::FlatShopee));
        assert_eq!(catalog.shipping.tier_for(11), Some(ShippingTier::FlatShopee));
        assert_eq!(catalog.shipping.threshold.below, 7.0);
        assert_eq!(catalog.shipping.threshold.above, 27.0);
    }

    #[test]
    fn test_adjusted_variants() {
        let catalog = current();
        assert_eq!(
            catalog.marketplace(11).unwrap().adjustment,
            PriceAdjustment::Double
        );
        assert_eq!(
            catalog.marketplace(8).unwrap().adjustment,
            PriceAdjustment::StackedSurcharge { rate: 0.10 }
        );
        assert_eq!(catalog.marketplace(10).unwrap().adjustment, PriceAdjustment::None);
    }

    #[test]
    fn test_kit_configs_present_in_both_versions() {
        for catalog in [legacy(), current()] {
            assert_eq!(catalog.kit_configs.len(), 4);
            let first = catalog.kit_config(0).unwrap();
            assert_eq!(first.name, "Kits de 2, 3 e 6");
            let multipliers: Vec<u32> = first.kits.iter().map(|k| k.multiplier).collect();
            assert_eq!(multipliers, vec![2, 3, 6]);
        }
    }
}
