// Core catalog logic lives here - everything the screens read or write
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod search;
pub mod store;

pub use catalog::Catalog;
pub use config::Config;
pub use error::Error;
pub use favorites::{add_favorite, is_favorite, remove_favorite, Favorites, FavoritesAction};
pub use models::{BrandFilter, ListingQuery, PhoneListing, SortMode};
pub use search::{distinct_brands, visible_listings};
pub use store::Store;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
