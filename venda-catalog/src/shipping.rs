use serde::{Deserialize, Serialize};

/// Shipping tier a marketplace id resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingTier {
    /// Price-dependent shipment: one value below the cutoff, another at or above it
    Threshold,
    FlatLow,
    FlatShopee,
}

/// Inclusive range of marketplace ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub min: u32,
    pub max: u32,
}

impl IdRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, id: u32) -> bool {
        id >= self.min && id <= self.max
    }
}

/// A band of marketplace ids charged a constant shipment value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatBand {
    pub ids: IdRange,
    pub value: f64,
}

/// A band of marketplace ids whose shipment depends on the sell price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub ids: IdRange,
    pub cutoff: f64,
    pub below: f64,
    pub above: f64,
}

impl ThresholdBand {
    /// The cutoff is inclusive: a price exactly at it takes the high value
    pub fn value_at(&self, price: f64) -> f64 {
        if price >= self.cutoff {
            self.above
        } else {
            self.below
        }
    }
}

/// A catalog version's complete shipment-cost rule. The partition of ids into
/// bands and the shipment constants are data, not code: each catalog version
/// carries its own schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingSchedule {
    pub threshold: ThresholdBand,
    pub flat_low: FlatBand,
    pub flat_shopee: FlatBand,
}

impl ShippingSchedule {
    /// Resolve the tier a marketplace id belongs to
    pub fn tier_for(&self, marketplace_id: u32) -> Option<ShippingTier> {
        if self.flat_low.ids.contains(marketplace_id) {
            Some(ShippingTier::FlatLow)
        } else if self.flat_shopee.ids.contains(marketplace_id) {
            Some(ShippingTier::FlatShopee)
        } else if self.threshold.ids.contains(marketplace_id) {
            Some(ShippingTier::Threshold)
        } else {
            None
        }
    }

    /// Shipment value for a marketplace at a given sell price
    pub fn value_for(&self, marketplace_id: u32, price: f64) -> Option<f64> {
        self.tier_for(marketplace_id).map(|tier| match tier {
            ShippingTier::FlatLow => self.flat_low.value,
            ShippingTier::FlatShopee => self.flat_shopee.value,
            ShippingTier::Threshold => self.threshold.value_at(price),
        })
    }
}
