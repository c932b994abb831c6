use crate::models::PhoneListing;

/// The user's favorites, in the order they were added
///
/// Values are never changed in place: `add` and `remove` hand back a new
/// `Favorites`, so anyone holding the old one keeps a consistent view.
/// Ids are unique within a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    items: Vec<PhoneListing>,
}

/// A change requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesAction {
    Add(PhoneListing),
    /// Remove by listing id
    Remove(String),
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `listing` unless its id is already present
    #[must_use]
    pub fn add(&self, listing: PhoneListing) -> Self {
        if self.contains(&listing.id) {
            return self.clone();
        }

        let mut items = self.items.clone();
        items.push(listing);
        Self { items }
    }

    /// Drop the listing with `id`; absent ids leave the set as it was
    #[must_use]
    pub fn remove(&self, id: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|listing| listing.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|listing| listing.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&PhoneListing> {
        self.items.iter().find(|listing| listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhoneListing> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[PhoneListing] {
        &self.items
    }

    /// Whether applying `action` would change anything
    pub fn would_change(&self, action: &FavoritesAction) -> bool {
        match action {
            FavoritesAction::Add(listing) => !self.contains(&listing.id),
            FavoritesAction::Remove(id) => self.contains(id),
        }
    }
}

impl<'a> IntoIterator for &'a Favorites {
    type Item = &'a PhoneListing;
    type IntoIter = std::slice::Iter<'a, PhoneListing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The favorites reducer: current state + action -> next state
pub fn reduce(state: &Favorites, action: FavoritesAction) -> Favorites {
    match action {
        FavoritesAction::Add(listing) => state.add(listing),
        FavoritesAction::Remove(id) => state.remove(&id),
    }
}

pub fn add_favorite(state: &Favorites, listing: PhoneListing) -> Favorites {
    reduce(state, FavoritesAction::Add(listing))
}

pub fn remove_favorite(state: &Favorites, id: &str) -> Favorites {
    reduce(state, FavoritesAction::Remove(id.to_string()))
}

pub fn is_favorite(state: &Favorites, id: &str) -> bool {
    state.contains(id)
}
