use crate::models::{BrandFilter, ListingQuery, PhoneListing};
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Dataset compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../data/phones.json");

/// The full, read-only list of listings
///
/// Loaded once at startup. Cloning is cheap and every clone shares the
/// same records; there is no way to modify them afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Arc<[PhoneListing]>,
}

impl Catalog {
    /// Load the dataset shipped with the application
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Load a dataset from a JSON file (an array of listings)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::DatasetError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        tracing::debug!("Read dataset from {}", path.display());
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let listings: Vec<PhoneListing> = serde_json::from_str(json)?;
        Self::from_listings(listings)
    }

    /// Build a catalog from already-parsed listings, checking that ids are
    /// unique and prices are usable
    pub fn from_listings(mut listings: Vec<PhoneListing>) -> Result<Self> {
        // -0.0 is stored as 0.0 so it prints and compares like any zero price
        for listing in &mut listings {
            if listing.price == 0.0 {
                listing.price = 0.0;
            }
        }

        let mut seen = HashSet::with_capacity(listings.len());

        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(Error::DuplicateListing(listing.id.clone()));
            }

            if !listing.price.is_finite() || listing.price < 0.0 {
                return Err(Error::InvalidListing {
                    id: listing.id.clone(),
                    reason: format!("price must be a non-negative number, got {}", listing.price),
                });
            }
        }

        tracing::info!("Loaded catalog with {} listings", listings.len());

        Ok(Self {
            listings: listings.into(),
        })
    }

    pub fn listings(&self) -> &[PhoneListing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&PhoneListing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Brand picker entries for this catalog
    pub fn brands(&self) -> Vec<BrandFilter> {
        crate::search::distinct_brands(&self.listings)
    }

    pub fn visible(&self, query: &ListingQuery) -> Vec<&PhoneListing> {
        query.apply(&self.listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortMode;

    const TWO_PHONES: &str = r#"[
        {"id": "1", "model": "iPhone 12", "constructor": "Apple", "os": "iOS",
         "price": 500, "releaseDate": 2020, "description": "",
         "saler": "A", "salerAvatar": "", "salerCity": "Paris",
         "salerCountry": "France", "phone": "0600000000"},
        {"id": "2", "model": "Galaxy S21", "constructor": "Samsung", "os": "Android",
         "price": 700, "releaseDate": 2021, "description": "",
         "saler": "B", "salerAvatar": "", "salerCity": "Lyon",
         "salerCountry": "France", "phone": "0600000001"}
    ]"#;

    #[test]
    fn test_bundled_dataset_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.brands()[0], BrandFilter::All);
    }

    #[test]
    fn test_from_json_str() {
        let catalog = Catalog::from_json_str(TWO_PHONES).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("2").unwrap().model, "Galaxy S21");
        assert!(catalog.get("3").is_none());
    }

    #[test]
    fn test_visible_uses_query() {
        let catalog = Catalog::from_json_str(TWO_PHONES).unwrap();
        let query = ListingQuery::new("", BrandFilter::All, SortMode::PriceDescending);
        let ids: Vec<&str> = catalog.visible(&query).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = TWO_PHONES.replace("\"id\": \"2\"", "\"id\": \"1\"");
        match Catalog::from_json_str(&json) {
            Err(Error::DuplicateListing(id)) => assert_eq!(id, "1"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let json = TWO_PHONES.replace("\"price\": 700", "\"price\": -1");
        assert!(matches!(
            Catalog::from_json_str(&json),
            Err(Error::InvalidListing { .. })
        ));
    }

    #[test]
    fn test_negative_zero_price_is_a_plain_zero() {
        let json = TWO_PHONES
            .replace("\"price\": 500", "\"price\": 0")
            .replace("\"price\": 700", "\"price\": -0.0");
        let catalog = Catalog::from_json_str(&json).unwrap();
        assert!(catalog.get("2").unwrap().price.is_sign_positive());

        for sort in [SortMode::PriceAscending, SortMode::PriceDescending] {
            let query = ListingQuery::new("", BrandFilter::All, sort);
            let ids: Vec<&str> = catalog.visible(&query).iter().map(|l| l.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2"]);
        }
    }

    #[test]
    fn test_missing_field_is_a_serialization_error() {
        let json = TWO_PHONES.replace("\"os\": \"iOS\",", "");
        assert!(matches!(
            Catalog::from_json_str(&json),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_clones_share_records() {
        let catalog = Catalog::from_json_str(TWO_PHONES).unwrap();
        let other = catalog.clone();
        assert!(std::ptr::eq(catalog.listings(), other.listings()));
    }
}
