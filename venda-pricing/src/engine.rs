use venda_catalog::{Catalog, Marketplace, ShippingTier};

/// Calculator failures. All are reported synchronously; the computation is
/// deterministic, so nothing here is worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("cost must be greater than zero, got {0}")]
    InvalidCost(f64),

    #[error("price must be greater than zero, got {0}")]
    InvalidPrice(f64),

    #[error("kit multiplier must be at least 1")]
    InvalidKitMultiplier,

    #[error("margin must stay above -100%, got {0}")]
    InvalidMargin(f64),

    #[error("unknown marketplace: {0}")]
    UnknownMarketplace(u32),

    #[error("commission rate {commission} plus tax rate {tax_rate} must stay below 1")]
    Configuration { commission: f64, tax_rate: f64 },
}

/// Sell-price / cost calculator over one immutable catalog snapshot.
///
/// Every operation is a pure function of its arguments and the snapshot, so
/// an engine can be shared across threads freely. Prices come back as raw
/// floats; rounding for display is the caller's concern.
pub struct PricingEngine {
    catalog: Catalog,
}

impl PricingEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The sell price that recovers `cost` plus margin after the marketplace
    /// commission, tax and shipment are taken out of it.
    ///
    /// The shipment is provisionally the low value; threshold-band
    /// marketplaces whose computed price reaches the cutoff get exactly one
    /// re-solve with the high value. This is a single fixed-point pass, not
    /// an iteration: a marginal cutoff crossing is accepted as-is. Channel
    /// post-adjustments (doubling, stacked surcharge) are applied last and
    /// never re-enter the threshold check.
    pub fn price_from_cost(
        &self,
        cost: f64,
        margin_pct: f64,
        marketplace_id: u32,
        tax_rate: f64,
        kit_multiplier: u32,
    ) -> Result<(f64, f64), PricingError> {
        if cost <= 0.0 {
            return Err(PricingError::InvalidCost(cost));
        }
        if kit_multiplier == 0 {
            return Err(PricingError::InvalidKitMultiplier);
        }
        if margin_pct <= -100.0 {
            return Err(PricingError::InvalidMargin(margin_pct));
        }

        let marketplace = self.marketplace(marketplace_id)?;
        let share = self.revenue_share(marketplace, tax_rate)?;
        let goods = cost * (1.0 + margin_pct / 100.0) * kit_multiplier as f64;

        // First pass with the provisional (price 0) shipment.
        let mut shipment = self.shipment_for(marketplace_id, 0.0)?;
        let mut price = (goods + shipment) / share;

        let band = &self.catalog.shipping.threshold;
        if self.catalog.shipping.tier_for(marketplace_id) == Some(ShippingTier::Threshold)
            && price >= band.cutoff
        {
            shipment = band.above;
            price = (goods + shipment) / share;
        }

        Ok((marketplace.adjustment.apply(price), shipment))
    }

    /// The inverse direction: the unit cost a listing must not exceed for a
    /// given sell price to still return the requested margin.
    ///
    /// The threshold is keyed on the input price rather than a computed one,
    /// and channel post-adjustments are not inverted here; the transform is
    /// defined for the price direction only.
    pub fn cost_from_price(
        &self,
        price: f64,
        margin_pct: f64,
        marketplace_id: u32,
        tax_rate: f64,
    ) -> Result<(f64, f64), PricingError> {
        if price <= 0.0 {
            return Err(PricingError::InvalidPrice(price));
        }
        if margin_pct <= -100.0 {
            return Err(PricingError::InvalidMargin(margin_pct));
        }

        let marketplace = self.marketplace(marketplace_id)?;
        let share = self.revenue_share(marketplace, tax_rate)?;
        let markup = 1.0 + margin_pct / 100.0;

        let mut shipment = self.shipment_for(marketplace_id, 0.0)?;
        let mut cost = (price * share - shipment) / markup;

        let band = &self.catalog.shipping.threshold;
        if self.catalog.shipping.tier_for(marketplace_id) == Some(ShippingTier::Threshold)
            && price >= band.cutoff
        {
            shipment = band.above;
            cost = (price * share - shipment) / markup;
        }

        Ok((cost, shipment))
    }

    fn marketplace(&self, id: u32) -> Result<&Marketplace, PricingError> {
        self.catalog
            .marketplace(id)
            .ok_or(PricingError::UnknownMarketplace(id))
    }

    /// Fraction of the sell price left once commission and tax are remitted
    fn revenue_share(
        &self,
        marketplace: &Marketplace,
        tax_rate: f64,
    ) -> Result<f64, PricingError> {
        let share = 1.0 - (marketplace.commission_rate + tax_rate);
        if share <= 0.0 {
            return Err(PricingError::Configuration {
                commission: marketplace.commission_rate,
                tax_rate,
            });
        }
        Ok(share)
    }

    // An id the schedule does not cover is unknown to the calculator even if
    // a marketplace record exists; validated snapshots rule this out.
    fn shipment_for(&self, marketplace_id: u32, price: f64) -> Result<f64, PricingError> {
        self.catalog
            .shipping
            .value_for(marketplace_id, price)
            .ok_or(PricingError::UnknownMarketplace(marketplace_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venda_catalog::builtin;

    const EPS: f64 = 1e-9;

    fn engine() -> PricingEngine {
        PricingEngine::new(builtin::current())
    }

    #[test]
    fn test_threshold_resolve_above_cutoff() {
        // Via Varejo, commission 0.17: the low-shipment solve lands at
        // 67 / 0.73 ~ 91.78, past the cutoff, so the high shipment applies.
        let (price, shipment) = engine().price_from_cost(50.0, 20.0, 5, 0.1, 1).unwrap();
        assert_eq!(shipment, 27.0);
        assert!((price - 87.0 / 0.73).abs() < EPS);
    }

    #[test]
    fn test_low_shipment_below_cutoff() {
        let (price, shipment) = engine().price_from_cost(10.0, 20.0, 5, 0.1, 1).unwrap();
        assert_eq!(shipment, 7.0);
        assert!((price - 19.0 / 0.73).abs() < EPS);
    }

    #[test]
    fn test_flat_band_never_resolves() {
        // Droga Raia sits in the flat band; even a price far past the cutoff
        // keeps the flat shipment.
        let (price, shipment) = engine().price_from_cost(200.0, 20.0, 6, 0.1, 1).unwrap();
        assert_eq!(shipment, 1.0);
        assert!(price > 78.0);
    }

    #[test]
    fn test_doubled_variant() {
        let (price, shipment) = engine().price_from_cost(10.0, 0.0, 11, 0.0, 1).unwrap();
        assert_eq!(shipment, 4.5);
        assert!((price - 36.25).abs() < EPS);
    }

    #[test]
    fn test_stacked_surcharge_variant() {
        let (price, _) = engine().price_from_cost(10.0, 0.0, 8, 0.0, 1).unwrap();
        assert!((price - (10.0 + 1.0) / 0.95 / 0.9 / 0.9).abs() < EPS);
    }

    #[test]
    fn test_kit_crosses_threshold_while_unit_does_not() {
        let engine = engine();
        let (unit, unit_shipment) = engine.price_from_cost(30.0, 20.0, 5, 0.1, 1).unwrap();
        let (kit, kit_shipment) = engine.price_from_cost(30.0, 20.0, 5, 0.1, 2).unwrap();
        assert_eq!(unit_shipment, 7.0);
        assert!(unit < 78.0);
        assert_eq!(kit_shipment, 27.0);
        assert!((kit - 99.0 / 0.73).abs() < EPS);
    }

    #[test]
    fn test_kit_price_is_cheaper_than_stacked_units() {
        // Shipment is charged once per listing, so a kit undercuts N units.
        let engine = engine();
        let (unit, _) = engine.price_from_cost(10.0, 0.0, 7, 0.0, 1).unwrap();
        let (kit, _) = engine.price_from_cost(10.0, 0.0, 7, 0.0, 3).unwrap();
        assert!(kit < 3.0 * unit);
    }

    #[test]
    fn test_round_trip_recovers_cost_below_cutoff() {
        let engine = engine();
        let (price, _) = engine.price_from_cost(10.0, 20.0, 5, 0.1, 1).unwrap();
        assert!(price < 78.0);
        let (cost, shipment) = engine.cost_from_price(price, 20.0, 5, 0.1).unwrap();
        assert_eq!(shipment, 7.0);
        assert!((cost - 10.0).abs() < EPS);
    }

    #[test]
    fn test_round_trip_recovers_cost_above_cutoff() {
        let engine = engine();
        let (price, _) = engine.price_from_cost(50.0, 20.0, 5, 0.1, 1).unwrap();
        assert!(price >= 78.0);
        let (cost, shipment) = engine.cost_from_price(price, 20.0, 5, 0.1).unwrap();
        assert_eq!(shipment, 27.0);
        assert!((cost - 50.0).abs() < EPS);
    }

    #[test]
    fn test_cost_direction_cutoff_is_inclusive() {
        let engine = engine();
        let (at_cutoff, shipment_at) = engine.cost_from_price(78.0, 20.0, 2, 0.1).unwrap();
        assert_eq!(shipment_at, 27.0);
        assert!((at_cutoff - (78.0 * 0.78 - 27.0) / 1.2).abs() < EPS);

        let (below, shipment_below) = engine.cost_from_price(77.99, 20.0, 2, 0.1).unwrap();
        assert_eq!(shipment_below, 7.0);
        assert!(below > at_cutoff);
    }

    #[test]
    fn test_cost_direction_skips_post_adjustment() {
        // Same price, same commission: the doubled variant and the plain
        // listing cost out identically because the transform is one-way.
        let engine = engine();
        let (doubled, _) = engine.cost_from_price(100.0, 20.0, 11, 0.1).unwrap();
        let (plain, _) = engine.cost_from_price(100.0, 20.0, 10, 0.1).unwrap();
        assert!((doubled - plain).abs() < EPS);
    }

    #[test]
    fn test_legacy_catalog_uses_its_own_constants() {
        let engine = PricingEngine::new(builtin::legacy());
        let (price, shipment) = engine.price_from_cost(50.0, 20.0, 0, 0.1, 1).unwrap();
        assert_eq!(shipment, 22.0);
        assert!((price - 82.0 / 0.78).abs() < EPS);
    }

    #[test]
    fn test_unknown_marketplace() {
        let engine = engine();
        assert!(matches!(
            engine.price_from_cost(10.0, 20.0, 99, 0.1, 1),
            Err(PricingError::UnknownMarketplace(99))
        ));
        assert!(matches!(
            engine.cost_from_price(100.0, 20.0, 99, 0.1),
            Err(PricingError::UnknownMarketplace(99))
        ));
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        let engine = engine();
        assert!(matches!(
            engine.price_from_cost(0.0, 20.0, 5, 0.1, 1),
            Err(PricingError::InvalidCost(_))
        ));
        assert!(matches!(
            engine.price_from_cost(-3.0, 20.0, 5, 0.1, 1),
            Err(PricingError::InvalidCost(_))
        ));
        assert!(matches!(
            engine.cost_from_price(0.0, 20.0, 5, 0.1),
            Err(PricingError::InvalidPrice(_))
        ));
        assert!(matches!(
            engine.price_from_cost(10.0, 20.0, 5, 0.1, 0),
            Err(PricingError::InvalidKitMultiplier)
        ));
    }

    #[test]
    fn test_margin_floor_rejected() {
        let engine = engine();
        assert!(matches!(
            engine.cost_from_price(100.0, -100.0, 5, 0.1),
            Err(PricingError::InvalidMargin(_))
        ));
        // Ordinary markdowns stay valid.
        assert!(engine.price_from_cost(10.0, -20.0, 5, 0.1, 1).is_ok());
    }

    #[test]
    fn test_commission_plus_tax_at_or_above_one_rejected() {
        let engine = engine();
        // Shopee commission 0.20 with a 0.80 tax rate leaves no share at all.
        assert!(matches!(
            engine.price_from_cost(10.0, 20.0, 10, 0.8, 1),
            Err(PricingError::Configuration { .. })
        ));
        assert!(matches!(
            engine.cost_from_price(100.0, 20.0, 10, 0.85),
            Err(PricingError::Configuration { .. })
        ));
    }
}
