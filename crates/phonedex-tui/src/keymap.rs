// Key bindings: terminal key events -> commands
use crate::app::{App, Command, InputMode, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use phonedex_core::SortMode;

/// Translate a key press into a command for the current screen
///
/// Returns None for keys that do nothing where the user currently is.
pub fn map_key(app: &App, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match app.screen() {
        Screen::Home => match app.input_mode {
            InputMode::Searching => map_search_key(key),
            InputMode::Normal => map_home_key(app, key),
        },
        Screen::Details(id) => match key.code {
            KeyCode::Char('f') | KeyCode::Char(' ') => Some(app.favorite_toggle(id)),
            KeyCode::Char('F') => Some(Command::OpenFavorites),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                Some(Command::Back)
            }
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
        Screen::Favorites => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Command::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Command::SelectPrevious),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Some(Command::OpenSelected),
            KeyCode::Char('d') | KeyCode::Delete => app
                .favorites()
                .as_slice()
                .get(app.favorites_index)
                .map(|listing| Command::RemoveFavorite(listing.id.clone())),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                Some(Command::BackToList)
            }
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
    }
}

fn map_search_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Command::LeaveSearch),
        KeyCode::Backspace => Some(Command::DeleteChar),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::ClearSearch)
        }
        KeyCode::Char(c) => Some(Command::InsertChar(c)),
        _ => None,
    }
}

fn map_home_key(app: &App, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Command::EnterSearch),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::SelectPrevious),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Some(Command::OpenSelected),
        KeyCode::Char('F') => Some(Command::OpenFavorites),
        KeyCode::Char('f') => Some(Command::ToggleFilters),
        // Pickers only react while the filters panel is visible
        KeyCode::Char('b') if app.show_filters => Some(Command::SelectBrand(app.adjacent_brand(true))),
        KeyCode::Char('B') if app.show_filters => {
            Some(Command::SelectBrand(app.adjacent_brand(false)))
        }
        KeyCode::Char('s') if app.show_filters => Some(Command::NextSort),
        KeyCode::Char(c @ '1'..='4') if app.show_filters => {
            let index = c as usize - '1' as usize;
            SortMode::all().get(index).copied().map(Command::SetSort)
        }
        KeyCode::Char('r') if app.show_filters => Some(Command::ResetFilters),
        _ => None,
    }
}
