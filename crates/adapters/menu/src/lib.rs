//! # carservice-adapter-menu
//!
//! Interactive numeric menu over any line-oriented input and output.
//!
//! ## Responsibilities
//! - Print the main menu and read a choice (`1`–`5`)
//! - Collect the fields of each operation, parsing ids and `YYYY-MM-DD HH:MM`
//!   timestamps locally so malformed input never reaches the services
//! - Map application results into the messages shown to the user
//! - Stop on choice `5` or when the input is exhausted
//!
//! ## Dependency rule
//! Depends on `carservice-app` (for services and port traits) and
//! `carservice-domain` (for domain types). Works with any `BufRead`/`Write`
//! pair so it can be driven by stdin/stdout or by an in-memory script.

pub mod choice;
pub mod error;
pub mod menu;
pub mod state;
pub mod terminal;

pub use menu::Menu;
pub use state::App;
