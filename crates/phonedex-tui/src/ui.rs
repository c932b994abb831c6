// UI rendering logic
use crate::app::{App, InputMode, Screen};
use phonedex_core::PhoneListing;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::Rgb(40, 167, 69); // favorites green
const DANGER: Color = Color::Rgb(200, 35, 51);
const PRICE: Color = Color::Rgb(0, 123, 255);

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Screen body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.screen() {
        Screen::Home => render_home(frame, app, chunks[1]),
        Screen::Details(_) => render_details(frame, app, chunks[1]),
        Screen::Favorites => render_favorites(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.screen().title(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" phonedex "));

    frame.render_widget(title, area);
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let filters_height = if app.show_filters { 6 } else { 1 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Favorites counter
            Constraint::Length(3),              // Search input
            Constraint::Length(filters_height), // Filters toggle / panel
            Constraint::Length(1),              // Result count
            Constraint::Min(3),                 // Listings
        ])
        .split(area);

    let favorites_button = Paragraph::new(Line::from(Span::styled(
        format!(" Mes favoris : {} ", app.favorites_count()),
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(favorites_button, chunks[0]);

    render_search_input(frame, app, chunks[1]);

    if app.show_filters {
        render_filters_panel(frame, app, chunks[2]);
    } else {
        let toggle = Paragraph::new(Span::styled(
            "Afficher les filtres ▼ (f)",
            Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(toggle, chunks[2]);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Nombre d'annonces : {}", format_count(app.visible_count())),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[3],
    );

    let items: Vec<ListItem> = app
        .visible()
        .iter()
        .map(|listing| listing_item(app, listing, area.width))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Annonces "))
        .highlight_style(Style::default().bg(Color::Rgb(68, 71, 90)))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.visible().is_empty() {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(list, chunks[4], &mut state);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode == InputMode::Searching;
    let input_style = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let text = if app.query.text.is_empty() && !searching {
        Span::styled("Rechercher un téléphone", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.query.text.as_str(), input_style)
    };

    // Long queries scroll left so the end and the cursor stay inside the borders
    let typed = app.query.text.chars().count().min(u16::MAX as usize) as u16;
    let offset = typed.saturating_sub(area.width.saturating_sub(3));

    let input = Paragraph::new(Line::from(text))
        .scroll((0, offset))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recherche (/ pour saisir, Entrée pour valider) ")
                .border_style(input_style),
        );
    frame.render_widget(input, area);

    if searching {
        let column = (area.x + 1).saturating_add(typed - offset);
        frame.set_cursor_position((column.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_filters_panel(frame: &mut Frame, app: &App, area: Rect) {
    let mut brand_spans = vec![Span::styled(
        format!("Marque : {}  ", app.query.brand),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for brand in app.brands() {
        // Selected option in green, like the picker it replaces
        let style = if *brand == app.query.brand {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        brand_spans.push(Span::styled(format!("[{}] ", brand), style));
    }

    let lines = vec![
        Line::from(brand_spans),
        Line::from(vec![
            Span::styled(
                format!("Trier par : {}", app.query.sort.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (s pour changer)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            "Réinitialiser les filtres (r)",
            Style::default().fg(Color::Red).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            "Masquer les filtres ▲ (f)",
            Style::default().fg(PRICE),
        )),
    ];

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Filtres (b/B : marque, 1-4 : tri) "))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn listing_item<'a>(app: &App, listing: &'a PhoneListing, width: u16) -> ListItem<'a> {
    let marker = if app.is_favorite(&listing.id) { "★ " } else { "  " };
    let max_desc = (width as usize).saturating_sub(12).max(20);

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(
                listing.model.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "  {} - {}",
                listing.release_date,
                format_price(listing.price, &app.currency)
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("  {}", truncate(&listing.description, max_desc)),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let Some(listing) = app.detail_listing() else {
        let missing = Paragraph::new("Annonce introuvable")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(missing, area);
        return;
    };

    let section = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let info = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(Span::styled(
            listing.model.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled("Information :", section)),
        Line::from(Span::styled(
            format!("Prix : {}", format_price(listing.price, &app.currency)),
            info,
        )),
        Line::from(Span::styled(format!("Système d'exploitation : {}", listing.os), info)),
        Line::from(Span::styled(format!("Marque : {}", listing.constructor), info)),
        Line::from(Span::styled(format!("Année de sortie : {}", listing.release_date), info)),
        Line::from(""),
        Line::from(Span::styled("Vendeur :", section)),
        Line::from(Span::styled(
            listing.saler.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Pays : {} • Ville : {}",
                listing.saler_country, listing.saler_city
            ),
            info,
        )),
        Line::from(Span::styled(format!("Tel. {}", listing.phone), info)),
        Line::from(Span::styled(
            listing.saler_avatar.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled("Description :", section)),
        Line::from(listing.description.clone()),
        Line::from(""),
    ];

    let button = if app.is_favorite(&listing.id) {
        Span::styled(
            " Retirer des favoris (f) ",
            Style::default().fg(Color::White).bg(DANGER).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " Ajouter au favoris (f) ",
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(button).alignment(Alignment::Center));

    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(details, area);
}

fn render_favorites(frame: &mut Frame, app: &App, area: Rect) {
    let favorites = app.favorites();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Back button
            Constraint::Length(1), // Count
            Constraint::Min(3),    // Favorites
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Retour à la liste (Échap) ",
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Nombre de favoris : {}", favorites.len()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );

    if favorites.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Vous n'avez aucun favori pour le moment.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem> = favorites
        .iter()
        .map(|listing| listing_item(app, listing, area.width))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Favoris "))
        .highlight_style(Style::default().bg(Color::Rgb(68, 71, 90)))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.favorites_index));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.screen(), app.input_mode) {
        (Screen::Home, InputMode::Searching) => "Entrée/Échap: valider  Retour arrière: effacer",
        (Screen::Home, InputMode::Normal) => {
            "/: rechercher  j/k: naviguer  Entrée: ouvrir  f: filtres  F: favoris  q: quitter"
        }
        (Screen::Details(_), _) => "f: favori  F: mes favoris  Échap: retour  q: quitter",
        (Screen::Favorites, _) => "j/k: naviguer  Entrée: ouvrir  d: retirer  Échap: liste  q: quitter",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(ACCENT)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// "500 €" / "499.99 €"
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{} {}", price, currency)
}

/// Count shown next to the list; a dash until the catalog is in
pub fn format_count(count: Option<usize>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

// Truncate on char boundaries, the descriptions are full of accents
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
