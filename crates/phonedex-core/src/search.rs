use crate::models::{BrandFilter, PhoneListing, SortMode};
use std::cmp::Ordering;

/// Compute the list the home screen shows
///
/// Three passes over the catalog: model substring (case-insensitive, empty
/// query matches everything), then brand, then a stable sort. Listings
/// with equal sort keys keep their dataset order.
pub fn visible_listings<'a>(
    all: &'a [PhoneListing],
    query: &str,
    brand: &BrandFilter,
    sort: SortMode,
) -> Vec<&'a PhoneListing> {
    let needle = query.to_lowercase();

    let mut visible: Vec<&PhoneListing> = all
        .iter()
        .filter(|listing| listing.model.to_lowercase().contains(&needle))
        .filter(|listing| brand.matches(listing))
        .collect();

    // slice::sort_by is stable, which is what keeps ties in input order
    match sort {
        SortMode::Default => {}
        // Numeric order: 0.0 and -0.0 tie
        SortMode::PriceAscending => visible.sort_by(|a, b| compare_prices(a.price, b.price)),
        SortMode::PriceDescending => visible.sort_by(|a, b| compare_prices(b.price, a.price)),
        SortMode::YearDescending => {
            visible.sort_by(|a, b| b.release_date.cmp(&a.release_date))
        }
    }

    visible
}

fn compare_prices(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Brand picker entries: `All` first, then each constructor in the order
/// it first shows up in the dataset
pub fn distinct_brands(all: &[PhoneListing]) -> Vec<BrandFilter> {
    let mut brands = vec![BrandFilter::All];

    for listing in all {
        let brand = BrandFilter::Exact(listing.constructor.clone());
        if !brands.contains(&brand) {
            brands.push(brand);
        }
    }

    brands
}
