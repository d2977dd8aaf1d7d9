use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, BTreeSet},
};

use crate::State;

pub(crate) type StateStore = BTreeMap<TypeId, Box<dyn State>>;

/// Access to the registered states while a command or compute runs.
///
/// Every `state_mut` call records the state as touched so the context can
/// mark it dirty once the command returns.
pub struct Dep<'a> {
    states: &'a mut StateStore,
    touched: &'a mut BTreeSet<TypeId>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a mut StateStore, touched: &'a mut BTreeSet<TypeId>) -> Self {
        Self { states, touched }
    }

    /// # Panics
    /// Panics if `T` was never added to the context.
    pub fn get_state_ref<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never added to the context.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.touched.insert(TypeId::of::<T>());
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }
}
