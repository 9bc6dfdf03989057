use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use venda_catalog::{Catalog, KitConfig, Marketplace};
use venda_core::CatalogRepository;
use venda_pricing::{PriceQuote, PricingEngine};
use venda_store::app_config::{Config, PricingDefaults};
use venda_store::StaticCatalogRepository;

use crate::error::ServiceError;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AllPricesRequest {
    pub cost: f64,
    pub margin_pct: Option<f64>,
    pub tax_rate: Option<f64>,
    pub kit_config_id: u32,
}

#[derive(Debug, Serialize)]
pub struct AllPricesResponse {
    pub quote_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub kit_config_name: String,
    pub results: Vec<PriceQuote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostRequest {
    pub price: f64,
    pub margin_pct: Option<f64>,
    pub tax_rate: Option<f64>,
    pub marketplace_id: u32,
}

#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub cost: f64,
    pub shipment_used: f64,
    pub marketplace_name: String,
}

// ============================================================================
// Service
// ============================================================================

/// The calculator's outward face. Each call loads one catalog snapshot from
/// the repository and runs the pure engine against it, so concurrent callers
/// never observe a half-published catalog.
pub struct QuoteService {
    repository: Arc<dyn CatalogRepository>,
    defaults: PricingDefaults,
}

impl QuoteService {
    pub fn new(repository: Arc<dyn CatalogRepository>, defaults: PricingDefaults) -> Self {
        Self {
            repository,
            defaults,
        }
    }

    /// Wire the service the way a deployment does: configuration, then the
    /// store's snapshot repository, then the facade.
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        let repository = StaticCatalogRepository::from_config(&config.catalog)
            .map_err(|err| ServiceError::Configuration(err.to_string()))?;
        Ok(Self::new(Arc::new(repository), config.pricing.clone()))
    }

    /// Sell prices for every marketplace in the catalog: the single-unit
    /// price plus one price per kit size in the requested config.
    pub async fn calculate_all_prices(
        &self,
        request: AllPricesRequest,
    ) -> Result<AllPricesResponse, ServiceError> {
        if request.cost <= 0.0 {
            return Err(ServiceError::InvalidInput(format!(
                "cost must be greater than zero, got {}",
                request.cost
            )));
        }

        let catalog = self.snapshot().await?;
        let kit_config = catalog
            .kit_config(request.kit_config_id)
            .cloned()
            .ok_or(ServiceError::UnknownKitConfig(request.kit_config_id))?;

        let margin_pct = request.margin_pct.unwrap_or(self.defaults.margin_pct);
        let tax_rate = request.tax_rate.unwrap_or(self.defaults.tax_rate);

        let engine = PricingEngine::new(catalog);
        let results = engine.quote_all(request.cost, margin_pct, tax_rate, &kit_config)?;
        tracing::debug!(
            "Quoted {} marketplaces for cost {} with kit config '{}'",
            results.len(),
            request.cost,
            kit_config.name
        );

        Ok(AllPricesResponse {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            kit_config_name: kit_config.name,
            results,
        })
    }

    /// The inverse direction: the unit cost a sell price supports on one
    /// marketplace.
    pub async fn calculate_cost(&self, request: CostRequest) -> Result<CostResponse, ServiceError> {
        if request.price <= 0.0 {
            return Err(ServiceError::InvalidInput(format!(
                "price must be greater than zero, got {}",
                request.price
            )));
        }

        let catalog = self.snapshot().await?;
        let marketplace_name = catalog
            .marketplace(request.marketplace_id)
            .map(|m| m.name.clone())
            .ok_or(ServiceError::UnknownMarketplace(request.marketplace_id))?;

        let margin_pct = request.margin_pct.unwrap_or(self.defaults.margin_pct);
        let tax_rate = request.tax_rate.unwrap_or(self.defaults.tax_rate);

        let engine = PricingEngine::new(catalog);
        let (cost, shipment_used) =
            engine.cost_from_price(request.price, margin_pct, request.marketplace_id, tax_rate)?;
        tracing::debug!(
            "Costed price {} on '{}': cost {}, shipment {}",
            request.price,
            marketplace_name,
            cost,
            shipment_used
        );

        Ok(CostResponse {
            cost,
            shipment_used,
            marketplace_name,
        })
    }

    /// Catalog listing for the mounting layer's marketplace picker
    pub async fn list_marketplaces(&self) -> Result<Vec<Marketplace>, ServiceError> {
        self.repository
            .list_marketplaces()
            .await
            .map_err(|err| ServiceError::Repository(err.to_string()))
    }

    /// Catalog listing for the mounting layer's kit-config picker
    pub async fn list_kit_configs(&self) -> Result<Vec<KitConfig>, ServiceError> {
        self.repository
            .list_kit_configs()
            .await
            .map_err(|err| ServiceError::Repository(err.to_string()))
    }

    async fn snapshot(&self) -> Result<Catalog, ServiceError> {
        self.repository
            .catalog()
            .await
            .map_err(|err| ServiceError::Repository(err.to_string()))
    }
}
