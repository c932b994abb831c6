use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Label of the "no brand restriction" entry in the brand picker
pub const ALL_BRANDS_LABEL: &str = "Toutes";

/// One phone advertisement - the star of the show
///
/// Field names on the wire follow the bundled dataset (`releaseDate`,
/// `salerAvatar`, ...). Records are never mutated after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneListing {
    pub id: String,
    pub model: String,
    /// Brand / manufacturer name
    pub constructor: String,
    pub os: String,
    pub price: f64,
    /// Release year
    pub release_date: u16,
    pub description: String,
    pub saler: String,
    pub saler_avatar: String,
    pub saler_city: String,
    pub saler_country: String,
    pub phone: String,
}

// Listings are identified by id alone
impl PartialEq for PhoneListing {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PhoneListing {}

impl Hash for PhoneListing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Brand restriction applied to the listing view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BrandFilter {
    #[default]
    All,
    Exact(String),
}

impl BrandFilter {
    pub fn matches(&self, listing: &PhoneListing) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Exact(brand) => listing.constructor == *brand,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, BrandFilter::All)
    }
}

impl std::fmt::Display for BrandFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandFilter::All => write!(f, "{}", ALL_BRANDS_LABEL),
            BrandFilter::Exact(brand) => write!(f, "{}", brand),
        }
    }
}

impl From<&str> for BrandFilter {
    /// The sentinel label maps back to `All`, anything else is an exact brand
    fn from(value: &str) -> Self {
        if value == ALL_BRANDS_LABEL {
            BrandFilter::All
        } else {
            BrandFilter::Exact(value.to_string())
        }
    }
}

/// How the visible list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price_asc")]
    PriceAscending,
    #[serde(rename = "price_desc")]
    PriceDescending,
    #[serde(rename = "year_desc")]
    YearDescending,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAscending => "price_asc",
            SortMode::PriceDescending => "price_desc",
            SortMode::YearDescending => "year_desc",
        }
    }

    /// Label shown in the sort picker
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Par défaut",
            SortMode::PriceAscending => "Prix croissant",
            SortMode::PriceDescending => "Prix décroissant",
            SortMode::YearDescending => "Année décroissante",
        }
    }

    pub fn all() -> Vec<SortMode> {
        vec![
            SortMode::Default,
            SortMode::PriceAscending,
            SortMode::PriceDescending,
            SortMode::YearDescending,
        ]
    }

    /// Next mode in picker order, wrapping around
    pub fn next(&self) -> SortMode {
        match self {
            SortMode::Default => SortMode::PriceAscending,
            SortMode::PriceAscending => SortMode::PriceDescending,
            SortMode::PriceDescending => SortMode::YearDescending,
            SortMode::YearDescending => SortMode::Default,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortMode::Default),
            "price_asc" | "price_ascending" => Ok(SortMode::PriceAscending),
            "price_desc" | "price_descending" => Ok(SortMode::PriceDescending),
            "year_desc" | "year_descending" => Ok(SortMode::YearDescending),
            other => Err(crate::Error::InvalidSortMode(other.to_string())),
        }
    }
}

/// Everything the list view filters and sorts by
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Case-insensitive substring matched against the model name
    pub text: String,
    pub brand: BrandFilter,
    pub sort: SortMode,
}

impl ListingQuery {
    pub fn new(text: impl Into<String>, brand: BrandFilter, sort: SortMode) -> Self {
        Self {
            text: text.into(),
            brand,
            sort,
        }
    }

    /// Back to every brand in dataset order; the search text stays
    pub fn reset_filters(&mut self) {
        self.brand = BrandFilter::All;
        self.sort = SortMode::Default;
    }

    pub fn apply<'a>(&self, all: &'a [PhoneListing]) -> Vec<&'a PhoneListing> {
        crate::search::visible_listings(all, &self.text, &self.brand, self.sort)
    }
}
