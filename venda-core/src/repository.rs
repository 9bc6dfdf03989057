use async_trait::async_trait;
use venda_catalog::{Catalog, KitConfig, Marketplace};

/// Read-only access to the published pricing catalog. The data layer that
/// owns catalog storage implements this; the calculator only consumes it.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// One consistent snapshot. Callers load it once per request and run the
    /// whole calculation against it; the repository must never hand out a
    /// half-updated catalog.
    async fn catalog(&self) -> Result<Catalog, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_marketplaces(
        &self,
    ) -> Result<Vec<Marketplace>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_kit_config(
        &self,
        id: u32,
    ) -> Result<Option<KitConfig>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_kit_configs(
        &self,
    ) -> Result<Vec<KitConfig>, Box<dyn std::error::Error + Send + Sync>>;
}
