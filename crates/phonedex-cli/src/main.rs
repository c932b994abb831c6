use anyhow::Context;
use clap::Parser;
use phonedex_core::{BrandFilter, Catalog, Config, ListingQuery, PhoneListing, SortMode, Store};
use phonedex_tui::App;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "phonedex")]
#[command(version, about = "Browse, filter and bookmark phone listings from the terminal", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON dataset to load instead of the bundled one
    #[arg(long, global = true, env = "PHONEDEX_DATASET")]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive catalog (default)
    Browse,
    /// Print the listings matching a search
    List {
        /// Case-insensitive text matched against the model name
        #[arg(short, long, default_value = "")]
        query: String,
        /// Exact brand name ("Toutes" for every brand)
        #[arg(short, long)]
        brand: Option<String>,
        /// default, price_asc, price_desc or year_desc
        #[arg(short, long, default_value = "default")]
        sort: SortMode,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the brands available in the dataset
    Brands,
    /// Show one listing in full
    Show {
        /// Listing id
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Browse));

    init_logging(interactive)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let catalog = load_catalog(cli.dataset.as_ref().or(config.catalog.dataset.as_ref()))?;

    match cli.command {
        None | Some(Commands::Browse) => {
            tracing::info!("Starting TUI with {} listings", catalog.len());
            let app = App::new(Store::new(catalog), &config.ui);
            phonedex_tui::run_tui(app, config.ui.mouse_enabled)?;
        }
        Some(Commands::List {
            query,
            brand,
            sort,
            json,
        }) => {
            let brand = brand.as_deref().map(BrandFilter::from).unwrap_or_default();
            let query = ListingQuery::new(query, brand, sort);
            tracing::info!("Listing with {:?}", query);

            let visible = catalog.visible(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!("Nombre d'annonces : {}", visible.len());
                for listing in visible {
                    println!("{}", summary_line(listing, &config.ui.currency));
                }
            }
        }
        Some(Commands::Brands) => {
            for brand in catalog.brands() {
                println!("{}", brand);
            }
        }
        Some(Commands::Show { id }) => {
            let listing = catalog
                .get(&id)
                .with_context(|| format!("No listing with id {}", id))?;
            print_details(listing, &config.ui.currency);
        }
    }

    Ok(())
}

fn load_catalog(dataset: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match dataset {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load dataset {}", path.display())),
        None => Catalog::bundled().context("Bundled dataset is invalid"),
    }
}

/// Logs go to stderr, except while the TUI owns the terminal
fn init_logging(to_file: bool) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("phonedex=info"));

    if to_file {
        let log_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("phonedex");
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create {}", log_dir.display()))?;
        let file = open_log_file(&log_dir)
            .with_context(|| format!("Failed to open log file in {}", log_dir.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

/// Each TUI session starts a fresh log instead of growing the previous one
fn open_log_file(dir: &Path) -> std::io::Result<File> {
    std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(dir.join("phonedex.log"))
}

fn summary_line(listing: &PhoneListing, currency: &str) -> String {
    format!(
        "[{}] {} | {} | {} - {} {}",
        listing.id, listing.model, listing.constructor, listing.release_date, listing.price, currency
    )
}

fn print_details(listing: &PhoneListing, currency: &str) {
    println!("{}", listing.model);
    println!();
    println!("Information :");
    println!("  Prix : {} {}", listing.price, currency);
    println!("  Système d'exploitation : {}", listing.os);
    println!("  Marque : {}", listing.constructor);
    println!("  Année de sortie : {}", listing.release_date);
    println!();
    println!("Vendeur :");
    println!("  {}", listing.saler);
    println!("  Pays : {} • Ville : {}", listing.saler_country, listing.saler_city);
    println!("  Tel. {}", listing.phone);
    println!();
    println!("Description :");
    println!("  {}", listing.description);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "phonedex", "list", "--query", "galaxy", "--brand", "Samsung", "--sort", "price_desc",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List { query, brand, sort, json }) => {
                assert_eq!(query, "galaxy");
                assert_eq!(brand.as_deref(), Some("Samsung"));
                assert_eq!(sort, SortMode::PriceDescending);
                assert!(!json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["phonedex", "list", "--sort", "cheapest"]).is_err());
    }

    #[test]
    fn test_no_subcommand_means_browse() {
        let cli = Cli::try_parse_from(["phonedex"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_log_file_restarts_each_session() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = open_log_file(dir.path()).unwrap();
        writeln!(first, "previous session with a long line").unwrap();
        drop(first);

        let mut second = open_log_file(dir.path()).unwrap();
        writeln!(second, "new").unwrap();
        drop(second);

        let content = std::fs::read_to_string(dir.path().join("phonedex.log")).unwrap();
        assert_eq!(content, "new\n");
    }

    #[test]
    fn test_summary_line() {
        let catalog = Catalog::bundled().unwrap();
        let listing = catalog.get("1").unwrap();
        assert_eq!(summary_line(listing, "€"), "[1] iPhone 12 | Apple | 2020 - 500 €");
    }
}
