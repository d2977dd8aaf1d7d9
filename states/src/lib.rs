//! Typed state registry shared by the business and UI crates.
//!
//! Everything the directory screen knows lives in a [`StateCtx`]:
//! - [`State`]: plain values addressed by their type
//! - [`Compute`]: cached values derived from states, recomputed when a dependency changes
//! - [`Command`]: named mutations dispatched by the UI

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod runtime;
mod state;
mod state_sync_status;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use runtime::{StateRuntime, Updater};
pub use state::State;
pub use state_sync_status::StateSyncStatus;
