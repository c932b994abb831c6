// TUI application state and command handling
use phonedex_core::config::UiConfig;
use phonedex_core::{BrandFilter, Favorites, FavoritesAction, ListingQuery, PhoneListing, SortMode, Store};
use std::sync::Arc;

/// Screens of the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,               // Liste des annonces
    Details(String),    // Annonce, by listing id
    Favorites,          // Mes Favoris
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Liste des annonces",
            Screen::Details(_) => "Annonce",
            Screen::Favorites => "Mes Favoris",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating the list
    Searching, // Typing in the search box
}

/// Everything the user can ask for
///
/// Key presses are mapped to one of these and fed to `App::dispatch`,
/// which is the only place UI state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    EnterSearch,
    LeaveSearch,
    InsertChar(char),
    DeleteChar,
    ClearSearch,
    ToggleFilters,
    SelectBrand(BrandFilter),
    NextSort,
    SetSort(SortMode),
    ResetFilters,
    SelectNext,
    SelectPrevious,
    OpenSelected,
    OpenFavorites,
    BackToList,
    Back,
    AddFavorite(String),
    RemoveFavorite(String),
    Quit,
}

pub struct App {
    store: Store,
    screens: Vec<Screen>,
    brands: Vec<BrandFilter>,
    // None until the catalog has been loaded into the view
    visible: Option<Vec<PhoneListing>>,
    pub query: ListingQuery,
    pub input_mode: InputMode,
    pub show_filters: bool,
    pub selected_index: usize,
    pub favorites_index: usize,
    pub status_message: Option<String>,
    pub currency: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Store, ui: &UiConfig) -> Self {
        Self {
            store,
            screens: vec![Screen::Home],
            brands: vec![BrandFilter::All],
            visible: None,
            query: ListingQuery::default(),
            input_mode: InputMode::Normal,
            show_filters: ui.show_filters,
            selected_index: 0,
            favorites_index: 0,
            status_message: None,
            currency: ui.currency.clone(),
            should_quit: false,
        }
    }

    /// Pull the catalog into the view: brand picker and first visible list
    pub fn load(&mut self) {
        self.brands = self.store.catalog().brands();
        self.refresh();
        tracing::debug!(
            "View loaded with {} listings and {} brands",
            self.store.catalog().len(),
            self.brands.len() - 1
        );
    }

    /// Recompute the visible list from the current query
    fn refresh(&mut self) {
        let visible: Vec<PhoneListing> = self
            .store
            .catalog()
            .visible(&self.query)
            .into_iter()
            .cloned()
            .collect();

        self.selected_index = self.selected_index.min(visible.len().saturating_sub(1));
        self.visible = Some(visible);
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn screen(&self) -> &Screen {
        // The stack always keeps Home at the bottom
        self.screens.last().unwrap_or(&Screen::Home)
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn brands(&self) -> &[BrandFilter] {
        &self.brands
    }

    pub fn visible(&self) -> &[PhoneListing] {
        self.visible.as_deref().unwrap_or(&[])
    }

    /// None means "not loaded yet", which is not the same as zero results
    pub fn visible_count(&self) -> Option<usize> {
        self.visible.as_ref().map(Vec::len)
    }

    pub fn favorites(&self) -> Arc<Favorites> {
        self.store.favorites()
    }

    pub fn favorites_count(&self) -> usize {
        self.store.favorites_count()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.store.is_favorite(id)
    }

    pub fn selected_listing(&self) -> Option<&PhoneListing> {
        self.visible().get(self.selected_index)
    }

    /// Listing shown on the details screen, if that is where we are
    pub fn detail_listing(&self) -> Option<PhoneListing> {
        match self.screen() {
            Screen::Details(id) => self.find_listing(id),
            _ => None,
        }
    }

    fn find_listing(&self, id: &str) -> Option<PhoneListing> {
        self.store
            .catalog()
            .get(id)
            .cloned()
            .or_else(|| self.store.favorites().get(id).cloned())
    }

    pub fn dispatch(&mut self, command: Command) {
        tracing::debug!("Dispatching {:?} on {:?}", command, self.screen());

        match command {
            Command::EnterSearch => self.input_mode = InputMode::Searching,
            Command::LeaveSearch => self.input_mode = InputMode::Normal,
            Command::InsertChar(c) => {
                self.query.text.push(c);
                self.refresh();
            }
            Command::DeleteChar => {
                self.query.text.pop();
                self.refresh();
            }
            Command::ClearSearch => {
                self.query.text.clear();
                self.refresh();
            }
            Command::ToggleFilters => self.show_filters = !self.show_filters,
            Command::SelectBrand(brand) => {
                self.query.brand = brand;
                self.refresh();
            }
            Command::NextSort => {
                self.query.sort = self.query.sort.next();
                self.refresh();
            }
            Command::SetSort(sort) => {
                self.query.sort = sort;
                self.refresh();
            }
            Command::ResetFilters => {
                self.query.reset_filters();
                self.refresh();
            }
            Command::SelectNext => self.select_next(),
            Command::SelectPrevious => self.select_previous(),
            Command::OpenSelected => self.open_selected(),
            Command::OpenFavorites => self.open_favorites(),
            Command::BackToList => {
                self.screens.truncate(1);
                self.input_mode = InputMode::Normal;
            }
            Command::Back => {
                if self.screens.len() > 1 {
                    self.screens.pop();
                }
                self.clamp_favorites_index();
            }
            Command::AddFavorite(id) => self.add_favorite(&id),
            Command::RemoveFavorite(id) => self.remove_favorite(&id),
            Command::Quit => self.should_quit = true,
        }
    }

    /// Brand picker entry next to the current one, wrapping at both ends
    pub fn adjacent_brand(&self, forward: bool) -> BrandFilter {
        if self.brands.is_empty() {
            return BrandFilter::All;
        }

        let len = self.brands.len();
        let current = self
            .brands
            .iter()
            .position(|brand| *brand == self.query.brand)
            .unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.brands[next].clone()
    }

    /// Add-or-remove command for `id`, depending on whether it is a favorite now
    pub fn favorite_toggle(&self, id: &str) -> Command {
        if self.is_favorite(id) {
            Command::RemoveFavorite(id.to_string())
        } else {
            Command::AddFavorite(id.to_string())
        }
    }

    fn select_next(&mut self) {
        match self.screen().clone() {
            Screen::Home => {
                let len = self.visible().len();
                if len > 0 {
                    self.selected_index = (self.selected_index + 1).min(len - 1);
                }
            }
            Screen::Favorites => {
                let len = self.favorites_count();
                if len > 0 {
                    self.favorites_index = (self.favorites_index + 1).min(len - 1);
                }
            }
            Screen::Details(_) => {}
        }
    }

    fn select_previous(&mut self) {
        match self.screen().clone() {
            Screen::Home => self.selected_index = self.selected_index.saturating_sub(1),
            Screen::Favorites => self.favorites_index = self.favorites_index.saturating_sub(1),
            Screen::Details(_) => {}
        }
    }

    fn open_selected(&mut self) {
        let id = match self.screen() {
            Screen::Home => self.selected_listing().map(|listing| listing.id.clone()),
            Screen::Favorites => self
                .favorites()
                .as_slice()
                .get(self.favorites_index)
                .map(|listing| listing.id.clone()),
            Screen::Details(_) => None,
        };

        if let Some(id) = id {
            tracing::debug!("Opening details for {}", id);
            self.input_mode = InputMode::Normal;
            self.screens.push(Screen::Details(id));
        }
    }

    fn open_favorites(&mut self) {
        self.input_mode = InputMode::Normal;
        // Going back to an existing Favorites screen instead of stacking another
        if let Some(pos) = self.screens.iter().position(|s| *s == Screen::Favorites) {
            self.screens.truncate(pos + 1);
        } else {
            self.screens.push(Screen::Favorites);
        }
        self.clamp_favorites_index();
    }

    fn add_favorite(&mut self, id: &str) {
        let Some(listing) = self.find_listing(id) else {
            tracing::warn!("Cannot favorite unknown listing {}", id);
            return;
        };

        let model = listing.model.clone();
        if self.store.dispatch(FavoritesAction::Add(listing)) {
            self.status_message = Some(format!("{} ajouté aux favoris", model));
        }
    }

    fn remove_favorite(&mut self, id: &str) {
        let model = self.find_listing(id).map(|listing| listing.model);
        if self.store.dispatch(FavoritesAction::Remove(id.to_string())) {
            self.status_message = Some(format!(
                "{} retiré des favoris",
                model.unwrap_or_else(|| id.to_string())
            ));
            self.clamp_favorites_index();
        }
    }

    fn clamp_favorites_index(&mut self) {
        self.favorites_index = self
            .favorites_index
            .min(self.favorites_count().saturating_sub(1));
    }
}
