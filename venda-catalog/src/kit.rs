use serde::{Deserialize, Serialize};

/// A bundle of N units sold as a single SKU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitDefinition {
    pub name: String,
    pub multiplier: u32,
}

/// A named, ordered set of kit sizes quoted together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitConfig {
    pub id: u32,
    pub name: String,
    pub kits: Vec<KitDefinition>,
}
