use crate::error::CatalogError;
use crate::models::{Listing, ListingType};
use serde::{Deserialize, Serialize};

/// Upper bound of the price slider
pub const DEFAULT_PRICE_MAX: i64 = 20_000;

/// Type selector of the catalog filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", content = "type", rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    All,
    OfType(ListingType),
}

impl TypeFilter {
    pub fn accepts(&self, kind: ListingType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::OfType(wanted) => *wanted == kind,
        }
    }
}

/// Type and price constraints narrowing the visible listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    pub kind: TypeFilter,
    /// Inclusive lower bound per night
    pub price_min: i64,
    /// Inclusive upper bound per night
    pub price_max: i64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            kind: TypeFilter::All,
            price_min: 0,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

impl FilterCriteria {
    pub fn new(kind: TypeFilter, price_min: i64, price_max: i64) -> Result<Self, CatalogError> {
        if price_min > price_max {
            return Err(CatalogError::InvalidPriceRange {
                min: price_min,
                max: price_max,
            });
        }

        Ok(Self {
            kind,
            price_min,
            price_max,
        })
    }

    /// Whether a listing passes both the type and the price predicate
    pub fn matches(&self, listing: &Listing) -> bool {
        self.kind.accepts(listing.kind)
            && (self.price_min..=self.price_max).contains(&listing.price_per_night)
    }
}

impl TryFrom<&str> for TypeFilter {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            value.parse().map(TypeFilter::OfType)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_price_range_is_rejected() {
        let err = FilterCriteria::new(TypeFilter::All, 5000, 1000).unwrap_err();
        assert_eq!(err, CatalogError::InvalidPriceRange { min: 5000, max: 1000 });
    }

    #[test]
    fn single_price_point_is_allowed() {
        assert!(FilterCriteria::new(TypeFilter::All, 3000, 3000).is_ok());
    }

    #[test]
    fn type_filter_from_selector_value() {
        assert_eq!(TypeFilter::try_from("all"), Ok(TypeFilter::All));
        assert_eq!(
            TypeFilter::try_from("room"),
            Ok(TypeFilter::OfType(ListingType::Room))
        );
        assert!(TypeFilter::try_from("penthouse").is_err());
    }

    #[test]
    fn default_matches_price_slider() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.kind, TypeFilter::All);
        assert_eq!(criteria.price_min, 0);
        assert_eq!(criteria.price_max, 20_000);
    }
}
