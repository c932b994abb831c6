use phonedex_core::config::UiConfig;
use phonedex_core::{Catalog, SortMode, Store};
use phonedex_tui::{ui, App, Command};
use ratatui::{backend::TestBackend, Terminal};

const TWO_PHONES: &str = r#"[
    {"id": "1", "model": "iPhone 12", "constructor": "Apple", "os": "iOS",
     "price": 500, "releaseDate": 2020, "description": "Très bon état",
     "saler": "Camille", "salerAvatar": "https://example.com/c.png", "salerCity": "Paris",
     "salerCountry": "France", "phone": "06 00 00 00 01"},
    {"id": "2", "model": "Galaxy S21", "constructor": "Samsung", "os": "Android",
     "price": 700, "releaseDate": 2021, "description": "Avec facture",
     "saler": "Lucas", "salerAvatar": "https://example.com/l.png", "salerCity": "Lyon",
     "salerCountry": "France", "phone": "06 00 00 00 02"}
]"#;

fn test_app() -> App {
    let catalog = Catalog::from_json_str(TWO_PHONES).unwrap();
    App::new(Store::new(catalog), &UiConfig::default())
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn home_shows_placeholder_count_before_load() {
    let app = test_app();
    let screen = draw(&app);
    assert!(screen.contains("Nombre d'annonces : -"));
    assert!(screen.contains("Liste des annonces"));
}

#[test]
fn home_lists_every_listing_after_load() {
    let mut app = test_app();
    app.load();
    let screen = draw(&app);

    assert!(screen.contains("Nombre d'annonces : 2"));
    assert!(screen.contains("Mes favoris : 0"));
    assert!(screen.contains("iPhone 12"));
    assert!(screen.contains("Galaxy S21"));
    assert!(screen.contains("2020 - 500 €"));
}

#[test]
fn zero_results_render_as_zero() {
    let mut app = test_app();
    app.load();
    for c in "nokia".chars() {
        app.dispatch(Command::InsertChar(c));
    }

    let screen = draw(&app);
    assert!(screen.contains("Nombre d'annonces : 0"));
    assert!(!screen.contains("iPhone 12"));
}

#[test]
fn filters_panel_shows_brand_and_sort() {
    let mut app = test_app();
    app.load();
    app.dispatch(Command::ToggleFilters);
    app.dispatch(Command::SelectBrand(app.adjacent_brand(true)));
    app.dispatch(Command::SetSort(SortMode::YearDescending));

    let screen = draw(&app);
    assert!(screen.contains("Marque : Apple"));
    assert!(screen.contains("[Toutes]"));
    assert!(screen.contains("[Samsung]"));
    assert!(screen.contains("Trier par : Année décroissante"));
    assert!(screen.contains("Nombre d'annonces : 1"));
}

#[test]
fn details_screen_and_favorite_button() {
    let mut app = test_app();
    app.load();
    app.dispatch(Command::OpenSelected);

    let screen = draw(&app);
    assert!(screen.contains("Annonce"));
    assert!(screen.contains("Prix : 500 €"));
    assert!(screen.contains("Marque : Apple"));
    assert!(screen.contains("Pays : France • Ville : Paris"));
    assert!(screen.contains("Ajouter au favoris"));

    app.dispatch(Command::AddFavorite("1".to_string()));
    let screen = draw(&app);
    assert!(screen.contains("Retirer des favoris"));
}

#[test]
fn favorites_screen_empty_and_filled() {
    let mut app = test_app();
    app.load();
    app.dispatch(Command::OpenFavorites);

    let screen = draw(&app);
    assert!(screen.contains("Mes Favoris"));
    assert!(screen.contains("Nombre de favoris : 0"));
    assert!(screen.contains("Vous n'avez aucun favori pour le moment."));

    app.dispatch(Command::AddFavorite("2".to_string()));
    let screen = draw(&app);
    assert!(screen.contains("Nombre de favoris : 1"));
    assert!(screen.contains("Galaxy S21"));
}

#[test]
fn long_search_keeps_end_and_cursor_in_box() {
    let mut app = test_app();
    app.load();
    app.dispatch(Command::EnterSearch);
    let query = format!("{}galaxy", "x".repeat(150));
    for c in query.chars() {
        app.dispatch(Command::InsertChar(c));
    }

    let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
    terminal.draw(|f| ui::render(f, &app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width;
    let row: String = (0..width).map(|x| buffer[(x, 5)].symbol()).collect();
    assert!(row.contains("xxgalaxy"), "search row was {:?}", row);
    assert!(row.ends_with('│'));

    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor.y, 5);
    assert!(cursor.x < width - 1);
}
