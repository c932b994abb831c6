use crate::catalog::Catalog;
use crate::favorites::{self, Favorites, FavoritesAction};
use std::sync::Arc;

/// Application state container
///
/// Owns the catalog and the current favorites snapshot. `dispatch` is the
/// only way favorites change; readers take `Arc` snapshots that stay valid
/// (and unchanged) no matter what gets dispatched afterwards.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Catalog,
    favorites: Arc<Favorites>,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            favorites: Arc::new(Favorites::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current favorites snapshot
    pub fn favorites(&self) -> Arc<Favorites> {
        Arc::clone(&self.favorites)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    /// Run `action` through the reducer and commit the result
    ///
    /// Returns whether the favorites changed. A no-op keeps the current
    /// snapshot instead of committing an equal copy.
    pub fn dispatch(&mut self, action: FavoritesAction) -> bool {
        if !self.favorites.would_change(&action) {
            tracing::debug!("Ignoring no-op favorites action: {}", action_label(&action));
            return false;
        }

        tracing::info!("Favorites action: {}", action_label(&action));
        self.favorites = Arc::new(favorites::reduce(&self.favorites, action));
        true
    }
}

fn action_label(action: &FavoritesAction) -> String {
    match action {
        FavoritesAction::Add(listing) => format!("add {}", listing.id),
        FavoritesAction::Remove(id) => format!("remove {}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> Store {
        Store::new(Catalog::bundled().unwrap())
    }

    #[test]
    fn test_starts_empty() {
        let store = test_store();
        assert_eq!(store.favorites_count(), 0);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_dispatch_add_and_remove() {
        let mut store = test_store();
        let listing = store.catalog().listings()[0].clone();
        let id = listing.id.clone();

        assert!(store.dispatch(FavoritesAction::Add(listing)));
        assert!(store.is_favorite(&id));
        assert_eq!(store.favorites_count(), 1);

        assert!(store.dispatch(FavoritesAction::Remove(id.clone())));
        assert!(!store.is_favorite(&id));
        assert_eq!(store.favorites_count(), 0);
    }

    #[test]
    fn test_snapshots_survive_later_dispatches() {
        let mut store = test_store();
        let listing = store.catalog().listings()[0].clone();

        let before = store.favorites();
        store.dispatch(FavoritesAction::Add(listing));
        let after = store.favorites();

        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_noop_keeps_same_snapshot() {
        let mut store = test_store();
        let listing = store.catalog().listings()[0].clone();
        store.dispatch(FavoritesAction::Add(listing.clone()));

        let snapshot = store.favorites();
        assert!(!store.dispatch(FavoritesAction::Add(listing)));
        assert!(!store.dispatch(FavoritesAction::Remove("missing".to_string())));
        assert!(Arc::ptr_eq(&snapshot, &store.favorites()));
    }
}
