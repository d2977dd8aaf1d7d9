mod navbar;
pub mod people;
mod sidebar;

pub use navbar::{BRAND, navbar};
pub use people::people_panel;
pub use sidebar::sidebar;
