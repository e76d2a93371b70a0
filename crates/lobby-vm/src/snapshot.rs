//! Observable state holder for view models.
//!
//! A [`Snapshot`] owns the latest state value handed to a rendering layer
//! and fires a change callback exactly once per mutation, synchronously,
//! after the new value is installed. The callback takes no arguments; the
//! reader is expected to fetch [`Snapshot::current`] afterwards.

use std::fmt;

/// Shallow merge of a partial value into a full state value.
///
/// A state struct implements `Patch<P>` for its companion patch struct,
/// where every field of `P` is an `Option` over the corresponding field of
/// the state. `apply_patch` overwrites exactly the fields that are `Some`;
/// nested values are replaced wholesale, never deep-merged.
pub trait Patch<P> {
    /// Overwrite the fields present in `patch`.
    fn apply_patch(&mut self, patch: P);
}

/// Single-writer observable state container.
///
/// The owner mutates the value through [`set`](Snapshot::set) (wholesale
/// replacement) or [`merge`](Snapshot::merge) (shallow field merge); each
/// call fires the change callback exactly once. The callback runs while the
/// mutation call is still on the stack, so it must not call back into the
/// owning view model - schedule work instead.
pub struct Snapshot<T> {
    current: T,
    on_change: Box<dyn Fn()>,
}

impl<T> Snapshot<T> {
    /// Create a snapshot holding `initial`, notifying `on_change` on every
    /// subsequent mutation.
    pub fn new(initial: T, on_change: impl Fn() + 'static) -> Self {
        Self {
            current: initial,
            on_change: Box::new(on_change),
        }
    }

    /// The latest state value.
    #[inline]
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Replace the state wholesale, then fire the change callback.
    pub fn set(&mut self, value: T) {
        self.current = value;
        (self.on_change)();
    }

    /// Shallow-merge `patch` into the state, then fire the change callback.
    ///
    /// Fires exactly once per call even when the patch is empty; callers
    /// that want to skip no-op notifications should not call `merge`.
    pub fn merge<P>(&mut self, patch: P)
    where
        T: Patch<P>,
    {
        self.current.apply_patch(patch);
        (self.on_change)();
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("current", &self.current)
            .finish()
    }
}
