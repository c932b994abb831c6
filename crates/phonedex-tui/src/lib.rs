// Terminal UI implementation using ratatui
// The three screens of the catalog: list, details, favorites

pub mod app;
pub mod keymap;
pub mod runner;
pub mod ui;

pub use app::{App, Command, InputMode, Screen};
pub use keymap::map_key;
pub use runner::run_tui;
