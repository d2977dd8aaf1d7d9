use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Formatter},
};

use crate::{
    Command, Compute, Dep, Error, State, StateRuntime, StateSyncStatus, dep::StateStore,
};

/// Owner of every state, compute and command of the application.
///
/// Frame protocol used by the UI:
/// 1. `sync_computes()` applies compute results published last frame
/// 2. widgets read via `state()` / `cached()` and write via `update()` or `enqueue_command()`
/// 3. `flush_commands()` then `run_computed()` at the end of the frame
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,
    states: StateStore,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    status: BTreeMap<TypeId, StateSyncStatus>,
    queued: Vec<(TypeId, &'static str)>,
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queued)
            .finish_non_exhaustive()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the state of type `T`. New states start dirty.
    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.status.insert(id, StateSyncStatus::Dirty);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.computes.insert(id, Box::new(compute));
        self.status.insert(id, StateSyncStatus::Init);
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access; the state is marked dirty whether or not it changes.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.status.insert(id, StateSyncStatus::Dirty);
        self.states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::state_not_found::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Last value published by compute `T`, if it is registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        self.cached::<T>().ok_or_else(Error::compute_not_found::<T>)
    }

    pub fn status_of<T: 'static>(&self) -> StateSyncStatus {
        self.status
            .get(&TypeId::of::<T>())
            .copied()
            .unwrap_or_default()
    }

    /// Runs command `C` immediately.
    pub fn dispatch<C: Command>(&mut self) {
        self.run_command(TypeId::of::<C>(), type_name::<C>());
    }

    /// Queues command `C` for the next `flush_commands`.
    pub fn enqueue_command<C: Command>(&mut self) {
        self.queued.push((TypeId::of::<C>(), type_name::<C>()));
    }

    /// Runs queued commands in the order they were enqueued.
    pub fn flush_commands(&mut self) {
        for (id, name) in std::mem::take(&mut self.queued) {
            self.run_command(id, name);
        }
    }

    fn run_command(&mut self, id: TypeId, name: &'static str) {
        let Some(command) = self.commands.remove(&id) else {
            log::warn!("Command {name} is not registered, ignoring dispatch");
            return;
        };

        log::debug!("Dispatching {name}");
        let mut touched = BTreeSet::new();
        command.run(
            Dep::new(&mut self.states, &mut touched),
            self.runtime.updater(),
        );
        self.commands.insert(id, command);

        for id in touched {
            self.status.insert(id, StateSyncStatus::Dirty);
        }
    }

    /// Recomputes every compute that never ran or depends on a dirty state.
    ///
    /// Returns `true` if at least one compute ran; its result becomes visible
    /// after the next `sync_computes`.
    pub fn run_computed(&mut self) -> bool {
        let dirty: BTreeSet<TypeId> = self
            .status
            .iter()
            .filter(|(_, status)| **status == StateSyncStatus::Dirty)
            .map(|(id, _)| *id)
            .collect();

        let updater = self.runtime.updater();
        let mut touched = BTreeSet::new();
        let mut ran = Vec::new();

        for (id, compute) in &self.computes {
            let never_ran = self.status.get(id).copied().unwrap_or_default()
                == StateSyncStatus::Init;
            if never_ran || compute.deps().iter().any(|dep| dirty.contains(dep)) {
                compute.compute(Dep::new(&mut self.states, &mut touched), updater.clone());
                ran.push(*id);
            }
        }

        for id in dirty {
            self.status.insert(id, StateSyncStatus::Clean);
        }
        for id in &ran {
            self.status.insert(*id, StateSyncStatus::Pending);
        }
        for id in touched {
            log::warn!("Compute mutated state {id:?}; it will be recomputed next run");
            self.status.insert(id, StateSyncStatus::Dirty);
        }

        !ran.is_empty()
    }

    /// Applies every compute result published through the runtime.
    pub fn sync_computes(&mut self) {
        for (id, value) in self.runtime.drain() {
            match self.computes.get_mut(&id) {
                Some(compute) => {
                    compute.assign_box(value);
                    self.status.insert(id, StateSyncStatus::Clean);
                }
                None => log::warn!("Dropped result for unregistered compute {id:?}"),
            }
        }
    }

    /// Flushes commands and brings every compute up to date.
    ///
    /// The UI spreads these steps over a frame; tests and startup code use
    /// this to observe the settled state directly.
    pub fn settle(&mut self) {
        self.flush_commands();
        self.run_computed();
        self.sync_computes();
    }

    /// Start of a UI frame: picks up results computed during the last one.
    pub fn begin_frame(&mut self) {
        self.sync_computes();
    }

    /// End of a UI frame: runs the commands widgets enqueued, then recomputes.
    ///
    /// Returns `true` when a command or compute ran, so the UI should repaint
    /// to show its effect.
    pub fn end_frame(&mut self) -> bool {
        let flushed = !self.queued.is_empty();
        self.flush_commands();
        let computed = self.run_computed();
        flushed || computed
    }

    pub fn runtime(&self) -> &StateRuntime {
        &self.runtime
    }
}
