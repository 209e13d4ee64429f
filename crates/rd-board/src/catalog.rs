//! Item catalog — prize identifier to display asset

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use rd_core::{RdError, RdResult};

/// Generic asset shown for identifiers the catalog does not know.
pub const PLACEHOLDER_ASSET: &str = "assets/placeholder.png";

/// Maps a prize identifier to its display asset.
///
/// Resolution never fails: unknown identifiers fall back to a generic
/// placeholder so a missing asset can never abort a session.
pub trait ItemCatalog: Send + Sync {
    /// Resolve an identifier to an asset URL.
    fn resolve_asset(&self, item_id: &str) -> String;
}

/// In-memory catalog backed by a plain mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticCatalog {
    assets: HashMap<String, String>,
    placeholder: String,
}

impl StaticCatalog {
    /// Create an empty catalog with the default placeholder.
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
            placeholder: PLACEHOLDER_ASSET.to_string(),
        }
    }

    /// Override the placeholder asset.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Add one mapping (builder style).
    pub fn with_asset(mut self, item_id: impl Into<String>, url: impl Into<String>) -> Self {
        self.assets.insert(item_id.into(), url.into());
        self
    }

    /// Add one mapping.
    pub fn insert(&mut self, item_id: impl Into<String>, url: impl Into<String>) {
        self.assets.insert(item_id.into(), url.into());
    }

    /// Load a catalog from its JSON form.
    pub fn from_json(json: &str) -> RdResult<Self> {
        serde_json::from_str(json).map_err(|e| RdError::Serialization(e.to_string()))
    }

    /// Number of known identifiers.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if no identifiers are known.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCatalog for StaticCatalog {
    fn resolve_asset(&self, item_id: &str) -> String {
        match self.assets.get(item_id) {
            Some(url) => url.clone(),
            None => {
                log::warn!("no asset for '{item_id}', using placeholder");
                self.placeholder.clone()
            }
        }
    }
}
