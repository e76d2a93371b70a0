//! Synchronous event emitter with unsubscribe guards.
//!
//! [`Emitter`] is the publish side; [`Subscription`] is the handle a
//! subscriber keeps to stay registered. Dropping (or disposing) the
//! subscription removes the handler. The [`EventSource`] trait is the
//! capability a teardown registry needs to attach listeners without knowing
//! the concrete emitter type.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::disposables::Dispose;

/// Something that can register an event handler and hand back an
/// unsubscribe guard.
pub trait EventSource<E> {
    /// Register `handler` for `event`. The handler stays registered until
    /// the returned [`Subscription`] is dropped or disposed.
    fn on(&self, event: E, handler: Box<dyn Fn()>) -> Subscription;
}

struct Entry<E> {
    id: u64,
    event: E,
    handler: Rc<dyn Fn()>,
}

struct Inner<E> {
    listeners: RefCell<Vec<Entry<E>>>,
    next_id: Cell<u64>,
}

/// Single-threaded event emitter.
///
/// Handlers for an event run synchronously, in subscription order, during
/// [`emit`](Emitter::emit). Handlers may subscribe or unsubscribe other
/// handlers while running; such changes take effect from the next `emit`.
pub struct Emitter<E> {
    inner: Rc<Inner<E>>,
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Emitter<E> {
    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }
}

impl<E: Copy + PartialEq + fmt::Debug + 'static> Emitter<E> {
    /// Register `handler` for `event`.
    pub fn subscribe(&self, event: E, handler: impl Fn() + 'static) -> Subscription {
        self.on(event, Box::new(handler))
    }

    /// Fire `event`, invoking every matching handler.
    ///
    /// The handler list is snapshotted before any handler runs, so a
    /// handler that unsubscribes itself still completes the current round.
    pub fn emit(&self, event: E) {
        let handlers: Vec<Rc<dyn Fn()>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|entry| entry.event == event)
            .map(|entry| Rc::clone(&entry.handler))
            .collect();

        tracing::trace!(?event, listeners = handlers.len(), "emit");

        for handler in handlers {
            handler();
        }
    }

    /// Number of handlers currently registered for `event`.
    pub fn listener_count(&self, event: E) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|entry| entry.event == event)
            .count()
    }
}

impl<E: Copy + PartialEq + fmt::Debug + 'static> EventSource<E> for Emitter<E> {
    fn on(&self, event: E, handler: Box<dyn Fn()>) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        self.inner.listeners.borrow_mut().push(Entry {
            id,
            event,
            handler: handler.into(),
        });

        let weak: Weak<Inner<E>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|entry| entry.id != id);
            }
        })
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Guard for a registered event handler.
///
/// Unregisters the handler when dropped or disposed; unregistering after
/// the emitter itself is gone is a no-op.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap an unsubscribe action.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Explicitly unregister now instead of waiting for drop.
    pub fn unsubscribe(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Dispose for Subscription {
    fn dispose(&mut self) {
        self.run_cancel();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Event {
        Update,
        Loaded,
    }

    #[test]
    fn emit_reaches_matching_listeners_only() {
        let emitter: Emitter<Event> = Emitter::new();
        let updates = Rc::new(Cell::new(0));
        let loads = Rc::new(Cell::new(0));

        let u = updates.clone();
        let _sub_a = emitter.subscribe(Event::Update, move || u.set(u.get() + 1));
        let l = loads.clone();
        let _sub_b = emitter.subscribe(Event::Loaded, move || l.set(l.get() + 1));

        emitter.emit(Event::Update);
        emitter.emit(Event::Update);

        assert_eq!(updates.get(), 2);
        assert_eq!(loads.get(), 0);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let emitter: Emitter<Event> = Emitter::new();
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        let sub = emitter.subscribe(Event::Update, move || c.set(c.get() + 1));
        emitter.emit(Event::Update);
        drop(sub);
        emitter.emit(Event::Update);

        assert_eq!(count.get(), 1);
        assert_eq!(emitter.listener_count(Event::Update), 0);
    }

    #[test]
    fn explicit_unsubscribe_unregisters() {
        let emitter: Emitter<Event> = Emitter::new();
        let sub = emitter.subscribe(Event::Update, || {});
        assert_eq!(emitter.listener_count(Event::Update), 1);
        sub.unsubscribe();
        assert_eq!(emitter.listener_count(Event::Update), 0);
    }

    #[test]
    fn handler_may_unsubscribe_another_mid_emit() {
        let emitter: Emitter<Event> = Emitter::new();
        let count = Rc::new(Cell::new(0));

        let victim = Rc::new(RefCell::new(None::<Subscription>));
        let c = count.clone();
        *victim.borrow_mut() = Some(emitter.subscribe(Event::Update, move || c.set(c.get() + 1)));

        let v = victim.clone();
        let _killer = emitter.subscribe(Event::Update, move || {
            v.borrow_mut().take();
        });

        // Both handlers were registered when this round was snapshotted.
        emitter.emit(Event::Update);
        assert_eq!(count.get(), 1);

        // The victim is gone for the next round.
        emitter.emit(Event::Update);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_after_emitter_dropped_is_noop() {
        let emitter: Emitter<Event> = Emitter::new();
        let sub = emitter.subscribe(Event::Update, || {});
        drop(emitter);
        sub.unsubscribe();
    }
}
