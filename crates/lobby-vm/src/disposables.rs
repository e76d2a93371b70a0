//! Teardown registry for transient objects.
//!
//! A view model acquires event subscriptions and other cleanup obligations
//! over its lifetime; [`Disposables`] collects them and releases everything
//! exactly once on [`dispose`](Disposables::dispose).
//!
//! The registry is a two-state machine: **Active** (accepts `track*` calls)
//! and **Disposed** (terminal). Tracking after disposal is a lifecycle bug
//! in the caller and fails with [`DisposeError::AlreadyDisposed`] rather
//! than silently leaking the resource. A second `dispose()` call is a no-op;
//! the first call already ran every cleanup.

use thiserror::Error;
use tracing::debug;

use crate::emitter::EventSource;

/// Errors raised for registry lifecycle misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisposeError {
    /// A `track*` call arrived after `dispose()` had already run.
    #[error("cannot track new items on a disposed registry")]
    AlreadyDisposed,
}

/// A resource with an explicit cleanup step.
///
/// `dispose` is called at most once by [`Disposables`]; implementations
/// must tolerate being dropped afterwards.
pub trait Dispose {
    /// Release the resource.
    fn dispose(&mut self);
}

/// Adapter running a closure once on disposal.
struct FnDisposer(Option<Box<dyn FnOnce()>>);

impl Dispose for FnDisposer {
    fn dispose(&mut self) {
        if let Some(callback) = self.0.take() {
            callback();
        }
    }
}

/// Registry of tracked cleanup obligations.
#[derive(Default)]
pub struct Disposables {
    tracked: Vec<Box<dyn Dispose>>,
    disposed: bool,
}

impl Disposables {
    /// Create an empty, active registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `dispose()` has run.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Track a disposable resource.
    pub fn track(&mut self, item: impl Dispose + 'static) -> Result<(), DisposeError> {
        if self.disposed {
            return Err(DisposeError::AlreadyDisposed);
        }
        self.tracked.push(Box::new(item));
        Ok(())
    }

    /// Track a plain cleanup callback.
    pub fn track_fn(&mut self, cleanup: impl FnOnce() + 'static) -> Result<(), DisposeError> {
        self.track(FnDisposer(Some(Box::new(cleanup))))
    }

    /// Register `handler` on `source` for `event` immediately, and
    /// unregister it on disposal.
    ///
    /// Nothing is registered if the registry is already disposed.
    pub fn track_listener<E>(
        &mut self,
        source: &dyn EventSource<E>,
        event: E,
        handler: impl Fn() + 'static,
    ) -> Result<(), DisposeError> {
        if self.disposed {
            return Err(DisposeError::AlreadyDisposed);
        }
        let subscription = source.on(event, Box::new(handler));
        self.track(subscription)
    }

    /// Run every tracked cleanup exactly once, in track order, and move to
    /// the terminal Disposed state. Subsequent calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        debug!(items = self.tracked.len(), "disposing tracked items");
        for mut item in self.tracked.drain(..) {
            item.dispose();
        }
    }
}

impl Drop for Disposables {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Disposables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposables")
            .field("tracked", &self.tracked.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::Emitter;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Event {
        Update,
    }

    #[test]
    fn dispose_runs_each_cleanup_exactly_once() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut disposables = Disposables::new();

        let f = first.clone();
        disposables.track_fn(move || f.set(f.get() + 1)).unwrap();
        let s = second.clone();
        disposables.track_fn(move || s.set(s.get() + 1)).unwrap();

        disposables.dispose();
        disposables.dispose();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn cleanups_run_in_track_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut disposables = Disposables::new();

        for label in ["a", "b", "c"] {
            let log = order.clone();
            disposables
                .track_fn(move || log.borrow_mut().push(label))
                .unwrap();
        }

        disposables.dispose();
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn track_after_dispose_fails() {
        let mut disposables = Disposables::new();
        disposables.dispose();

        assert!(disposables.is_disposed());
        assert_eq!(
            disposables.track_fn(|| {}),
            Err(DisposeError::AlreadyDisposed)
        );
    }

    #[test]
    fn is_disposed_flips_only_after_dispose() {
        let mut disposables = Disposables::new();
        disposables.track_fn(|| {}).unwrap();
        assert!(!disposables.is_disposed());
        disposables.dispose();
        assert!(disposables.is_disposed());
    }

    #[test]
    fn tracked_listener_is_removed_on_dispose() {
        let emitter: Emitter<Event> = Emitter::new();
        let count = Rc::new(Cell::new(0));
        let mut disposables = Disposables::new();

        let c = count.clone();
        disposables
            .track_listener(&emitter, Event::Update, move || c.set(c.get() + 1))
            .unwrap();

        emitter.emit(Event::Update);
        disposables.dispose();
        emitter.emit(Event::Update);

        assert_eq!(count.get(), 1);
        assert_eq!(emitter.listener_count(Event::Update), 0);
    }

    #[test]
    fn track_listener_after_dispose_registers_nothing() {
        let emitter: Emitter<Event> = Emitter::new();
        let mut disposables = Disposables::new();
        disposables.dispose();

        let result = disposables.track_listener(&emitter, Event::Update, || {});
        assert_eq!(result, Err(DisposeError::AlreadyDisposed));
        assert_eq!(emitter.listener_count(Event::Update), 0);
    }

    #[test]
    fn drop_without_dispose_still_cleans_up() {
        let count = Rc::new(Cell::new(0));
        {
            let mut disposables = Disposables::new();
            let c = count.clone();
            disposables.track_fn(move || c.set(c.get() + 1)).unwrap();
        }
        assert_eq!(count.get(), 1);
    }
}
