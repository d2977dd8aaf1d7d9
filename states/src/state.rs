use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx), one instance per type.
///
/// Implementors return `self` from both accessors; they exist so the context
/// can downcast boxed states without trait upcasting.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
