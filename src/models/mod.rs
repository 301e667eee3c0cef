use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of rentable property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Apartment,
    Villa,
    Studio,
    Room,
}

impl ListingType {
    pub const ALL: [ListingType; 4] = [
        ListingType::Apartment,
        ListingType::Villa,
        ListingType::Studio,
        ListingType::Room,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Apartment => "apartment",
            ListingType::Villa => "villa",
            ListingType::Studio => "studio",
            ListingType::Room => "room",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown listing type: {s}"))
    }
}

/// Map position of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A rentable property record in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
    /// Whole currency units per night
    pub price_per_night: i64,
    pub image: String,
    pub beds: u32,
    pub baths: u32,
    pub area_sqm: u32,
    pub address: String,
    pub location: Location,
    pub rating: f32,
    pub review_count: u32,
    /// Unavailable listings are still shown, but cannot be booked
    pub available: bool,
}

impl Listing {
    pub fn is_bookable(&self) -> bool {
        self.available
    }
}

/// Guest review shown on the reviews page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: u32,
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_type_parses_case_insensitively() {
        assert_eq!("villa".parse::<ListingType>(), Ok(ListingType::Villa));
        assert_eq!(" Studio ".parse::<ListingType>(), Ok(ListingType::Studio));
        assert!("castle".parse::<ListingType>().is_err());
    }

    #[test]
    fn listing_type_serializes_lowercase() {
        let json = serde_json::to_string(&ListingType::Apartment).unwrap();
        assert_eq!(json, "\"apartment\"");
    }
}
