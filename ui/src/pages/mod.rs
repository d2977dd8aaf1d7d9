//! Pages module for the application.
//!
//! One page per [`peopleco_business::Route`]:
//! - `overview_page`: Headline counts of the directory
//! - `people_page`: The people table

mod overview_page;
mod people_page;

pub use overview_page::overview_page;
pub use people_page::people_page;
