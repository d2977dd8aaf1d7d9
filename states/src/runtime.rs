use std::any::{Any, TypeId};

use flume::{Receiver, Sender};

use crate::Compute;

type Message = (TypeId, Box<dyn Any>);

/// Channel that carries compute results from `run_computed` to `sync_computes`.
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Message>,
    recv: Receiver<Message>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    /// Takes every result published so far, oldest first.
    pub fn drain(&self) -> Vec<(TypeId, Box<dyn Any>)> {
        self.recv.try_iter().collect()
    }
}

/// Publishes a new compute value.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Message>,
}

impl Updater {
    pub fn set<T: Compute>(&self, value: T) {
        let boxed: Box<dyn Any> = Box::new(value);
        if self.send.send((TypeId::of::<T>(), boxed)).is_err() {
            log::warn!(
                "Dropped update for {}: runtime is gone",
                std::any::type_name::<T>()
            );
        }
    }
}
