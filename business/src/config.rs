//! Startup configuration read from `PEOPLECO_*` environment variables.

use std::any::Any;
use std::env::vars;

use anyhow::{Context, bail};
use log::info;
use peopleco_states::State;
use serde::Deserialize;

use crate::Route;

const ENV_PREFIX: &str = "PEOPLECO_";

pub const DEFAULT_SEED_ROWS: usize = 20;
pub const MAX_SEED_ROWS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    seed_rows: usize,
    rng_seed: Option<u64>,
    start_page: Route,
}

// Values as they appear in the environment, parsed in `from_raw` so errors
// can name the offending variable.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    seed_rows: Option<String>,
    rng_seed: Option<String>,
    start_page: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed_rows: DEFAULT_SEED_ROWS,
            rng_seed: None,
            start_page: Route::default(),
        }
    }
}

impl DirectoryConfig {
    /// Fixed config for tests: no seed rows, deterministic rng.
    pub fn new_for_test() -> Self {
        Self {
            seed_rows: 0,
            rng_seed: Some(0),
            start_page: Route::PeopleDirectory,
        }
    }

    pub fn with_seed_rows(mut self, seed_rows: usize) -> Self {
        self.seed_rows = seed_rows;
        self
    }

    pub fn with_start_page(mut self, start_page: Route) -> Self {
        self.start_page = start_page;
        self
    }

    /// Number of generated people the store starts with.
    pub fn seed_rows(&self) -> usize {
        self.seed_rows
    }

    /// Seed of the generator rng; `None` seeds from the OS.
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    pub fn start_page(&self) -> Route {
        self.start_page
    }

    /// Reads the process environment.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_env(vars())
    }

    /// Reads `PEOPLECO_`-prefixed pairs; other pairs are ignored.
    pub fn from_env<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            seed_rows,
            rng_seed,
            start_page,
        } = raw;

        let seed_rows = match seed_rows {
            Some(value) => {
                let rows: usize = value
                    .trim()
                    .parse()
                    .with_context(|| format!("PEOPLECO_SEED_ROWS is not a row count: `{value}`"))?;
                if rows > MAX_SEED_ROWS {
                    bail!("PEOPLECO_SEED_ROWS must be at most {MAX_SEED_ROWS}, got {rows}");
                }
                info!("Using provided PEOPLECO_SEED_ROWS: {rows}");
                rows
            }
            None => {
                info!("PEOPLECO_SEED_ROWS not set, defaulting to {DEFAULT_SEED_ROWS}");
                DEFAULT_SEED_ROWS
            }
        };

        let rng_seed = match rng_seed {
            Some(value) => {
                let seed: u64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("PEOPLECO_RNG_SEED is not a u64: `{value}`"))?;
                info!("Using provided PEOPLECO_RNG_SEED: {seed}");
                Some(seed)
            }
            None => None,
        };

        let start_page = match start_page {
            Some(value) => value
                .parse::<Route>()
                .map_err(anyhow::Error::msg)
                .context("PEOPLECO_START_PAGE is invalid")?,
            None => Route::default(),
        };

        Ok(Self {
            seed_rows,
            rng_seed,
            start_page,
        })
    }
}

impl State for DirectoryConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
