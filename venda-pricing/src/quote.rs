use serde::{Deserialize, Serialize};
use venda_catalog::KitConfig;

use crate::engine::{PricingEngine, PricingError};

/// Price for one kit size of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitPrice {
    pub name: String,
    pub multiplier: u32,
    pub price: f64,
}

/// Full sell-price breakdown for a single marketplace: the single-unit price,
/// one price per kit size, and the per-unit commission / tax / profit splits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    pub marketplace_id: u32,
    pub marketplace_name: String,
    pub unit_price: f64,
    pub shipment_used: f64,
    pub kits: Vec<KitPrice>,
    pub commission_amount: f64,
    pub tax_amount: f64,
    pub profit_amount: f64,
}

impl PricingEngine {
    /// One quote per catalog marketplace. The inputs are validated up front
    /// by `price_from_cost`, so a failure here means bad input or a broken
    /// snapshot, never a partial result.
    pub fn quote_all(
        &self,
        cost: f64,
        margin_pct: f64,
        tax_rate: f64,
        kit_config: &KitConfig,
    ) -> Result<Vec<PriceQuote>, PricingError> {
        let mut quotes = Vec::with_capacity(self.catalog().marketplaces.len());

        for marketplace in &self.catalog().marketplaces {
            let (unit_price, shipment_used) =
                self.price_from_cost(cost, margin_pct, marketplace.id, tax_rate, 1)?;

            let mut kits = Vec::with_capacity(kit_config.kits.len());
            for kit in &kit_config.kits {
                let (price, _) =
                    self.price_from_cost(cost, margin_pct, marketplace.id, tax_rate, kit.multiplier)?;
                kits.push(KitPrice {
                    name: kit.name.clone(),
                    multiplier: kit.multiplier,
                    price,
                });
            }

            quotes.push(PriceQuote {
                marketplace_id: marketplace.id,
                marketplace_name: marketplace.name.clone(),
                unit_price,
                shipment_used,
                kits,
                commission_amount: unit_price * marketplace.commission_rate,
                tax_amount: unit_price * tax_rate,
                profit_amount: cost * margin_pct / 100.0,
            });
        }

        Ok(quotes)
    }
}
