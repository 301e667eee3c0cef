pub mod embedded;
pub mod file;
pub mod traits;
pub mod types;

pub use embedded::EmbeddedCatalog;
pub use file::JsonFileCatalog;
pub use traits::CatalogSource;
pub use types::{FilterCriteria, TypeFilter, DEFAULT_PRICE_MAX};

use crate::error::CatalogError;
use crate::models::Listing;
use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::{debug, info};

/// Visible subset of `listings` for the given criteria, in catalog order
pub fn filter(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

fn validate(listing: &Listing) -> Result<(), String> {
    if listing.price_per_night <= 0 {
        return Err(format!(
            "price per night must be positive, got {}",
            listing.price_per_night
        ));
    }
    for (field, value) in [
        ("beds", listing.beds),
        ("baths", listing.baths),
        ("area_sqm", listing.area_sqm),
    ] {
        if value == 0 {
            return Err(format!("{field} must be positive"));
        }
    }
    if !(0.0..=5.0).contains(&listing.rating) {
        return Err(format!("rating must be within 0..=5, got {}", listing.rating));
    }
    Ok(())
}

/// Validated, immutable list of listings
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());

        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateListingId(listing.id));
            }
            validate(listing).map_err(|reason| CatalogError::InvalidListing {
                id: listing.id,
                reason,
            })?;
        }

        Ok(Self { listings })
    }

    /// Load and validate listings from a source
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        info!("Loading catalog from {} source", source.source_name());

        let listings = source
            .load()
            .await
            .with_context(|| format!("Failed to load {} catalog", source.source_name()))?;
        let catalog = Self::new(listings)?;

        info!("Catalog ready with {} listings", catalog.len());
        Ok(catalog)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        let visible = filter(&self.listings, criteria);
        debug!(
            "Filter {:?} {}..={} kept {} of {} listings",
            criteria.kind,
            criteria.price_min,
            criteria.price_max,
            visible.len(),
            self.len()
        );
        visible
    }
}
