use async_trait::async_trait;
use venda_catalog::{builtin, Catalog, CatalogError, KitConfig, Marketplace};
use venda_core::CatalogRepository;

use crate::app_config::CatalogConfig;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unknown catalog version '{0}'")]
    UnknownCatalogVersion(String),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog snapshot rejected: {0}")]
    Invalid(#[from] CatalogError),
}

/// Repository over an immutable in-process catalog snapshot.
///
/// The snapshot is validated once at construction and cloned out per
/// `catalog()` call, so every caller keeps a consistent view for the whole
/// calculation. Publishing a new catalog means building a new repository.
pub struct StaticCatalogRepository {
    snapshot: Catalog,
}

impl StaticCatalogRepository {
    pub fn new(snapshot: Catalog) -> Result<Self, StoreError> {
        snapshot.validate()?;
        Ok(Self { snapshot })
    }

    /// Build the snapshot named by configuration: a JSON file when one is
    /// given, otherwise a built-in version.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, StoreError> {
        let snapshot = match &config.file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str::<Catalog>(&raw)?
            }
            None => Self::builtin_version(&config.version)?,
        };

        let repository = Self::new(snapshot)?;
        tracing::info!(
            "Published catalog '{}' with {} marketplaces and {} kit configs",
            repository.snapshot.version,
            repository.snapshot.marketplaces.len(),
            repository.snapshot.kit_configs.len()
        );
        Ok(repository)
    }

    fn builtin_version(name: &str) -> Result<Catalog, StoreError> {
        match name {
            "legacy" => Ok(builtin::legacy()),
            "current" => Ok(builtin::current()),
            other => Err(StoreError::UnknownCatalogVersion(other.to_string())),
        }
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn catalog(&self) -> Result<Catalog, BoxedError> {
        Ok(self.snapshot.clone())
    }

    async fn list_marketplaces(&self) -> Result<Vec<Marketplace>, BoxedError> {
        Ok(self.snapshot.marketplaces.clone())
    }

    async fn get_kit_config(&self, id: u32) -> Result<Option<KitConfig>, BoxedError> {
        Ok(self.snapshot.kit_config(id).cloned())
    }

    async fn list_kit_configs(&self) -> Result<Vec<KitConfig>, BoxedError> {
        Ok(self.snapshot.kit_configs.clone())
    }
}
