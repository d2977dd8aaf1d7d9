use std::any::Any;

use crate::{Dep, Updater};

/// An explicit mutation of one or more states.
///
/// Commands never run implicitly: the UI either calls `StateCtx::dispatch`
/// or queues them with `StateCtx::enqueue_command` for the end of the frame.
/// Input for a command is read from a dedicated input state that the caller
/// fills in beforehand.
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
