use std::any::{Any, TypeId, type_name};

use crate::{Dep, State, Updater};

/// Type ids of the states a compute reads.
pub type ComputeDeps = Vec<TypeId>;

/// A cached value derived from other states.
///
/// `StateCtx::run_computed` calls [`Compute::compute`] whenever one of
/// [`Compute::deps`] was changed since the last run. The compute publishes its
/// new value through the [`Updater`]; `StateCtx::sync_computes` then swaps it in
/// via [`Compute::assign_box`].
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn assign_box(&mut self, new_self: Box<dyn Any>);
}

/// Shared `assign_box` body: replace `target` when the box holds a `T`.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::warn!(
            "Ignored compute update with unexpected type for {}",
            type_name::<T>()
        ),
    }
}
