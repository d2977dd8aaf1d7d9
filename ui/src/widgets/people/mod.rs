//! People directory module.
//!
//! - `panel`: Main panel widget
//! - `toolbar`: Title, count badge, search, filters and Add New
//! - `table`: Table rendering components (columns, header, row, cells)
//! - `details`: Read-only details window
//! - `modals`: Add, edit and delete dialogs

mod details;
mod modals;
mod panel;
pub mod table;
mod toolbar;

pub use panel::{EMPTY_HINT, people_panel};
pub use toolbar::{SEARCH_HINT, badge_text};
