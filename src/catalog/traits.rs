use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply catalog listings
/// Embedded demo data today, a config file or a listings API later
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the raw listings, unvalidated
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
