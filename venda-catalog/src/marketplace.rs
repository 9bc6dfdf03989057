use serde::{Deserialize, Serialize};

/// A sales channel: its catalog id, display name, and the fraction of the
/// sell price the channel retains as commission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marketplace {
    pub id: u32,
    pub name: String,
    pub commission_rate: f64,
    #[serde(default)]
    pub adjustment: PriceAdjustment,
}

/// Final multiplicative transform some channel variants apply to a computed
/// sell price. Applied after the shipment threshold has been settled, and only
/// in the cost-to-price direction; the inverse calculation does not undo it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceAdjustment {
    #[default]
    None,
    /// The listing is published at twice the computed price
    Double,
    /// The same proportional surcharge applied twice: `p / (1 - rate)^2`
    StackedSurcharge { rate: f64 },
}

impl PriceAdjustment {
    pub fn apply(&self, price: f64) -> f64 {
        match self {
            PriceAdjustment::None => price,
            PriceAdjustment::Double => price * 2.0,
            PriceAdjustment::StackedSurcharge { rate } => price / (1.0 - rate) / (1.0 - rate),
        }
    }
}
