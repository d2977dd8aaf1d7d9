//! Which page the main area shows.

use std::any::Any;
use std::str::FromStr;

use peopleco_states::State;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Headline counts of the directory.
    #[serde(rename = "overview")]
    Overview,
    /// The people table.
    #[default]
    #[serde(rename = "people")]
    PeopleDirectory,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Overview, Route::PeopleDirectory];

    /// Sidebar text.
    pub fn label(self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::PeopleDirectory => "People Directory",
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(Route::Overview),
            "people" => Ok(Route::PeopleDirectory),
            other => Err(format!("unknown page `{other}`, expected `overview` or `people`")),
        }
    }
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
