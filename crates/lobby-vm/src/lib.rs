//! # lobby-vm
//!
//! Minimal building blocks for view-model style state in an event-loop
//! driven UI: an observable state holder, a teardown registry, and a tiny
//! synchronous event emitter.
//!
//! Everything here is single-threaded by contract. A view model owns its
//! [`Snapshot`] and [`Disposables`]; the rendering layer reads the snapshot
//! and re-renders when the change callback fires. There is no locking and no
//! async machinery - callers on runtimes with real parallelism must
//! serialize access themselves.
//!
//! ## Quick Start
//!
//! ### Observable state
//!
//! ```rust
//! use lobby_vm::Snapshot;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let fired = Rc::new(Cell::new(0u32));
//! let counter = fired.clone();
//! let mut state = Snapshot::new(1u32, move || counter.set(counter.get() + 1));
//!
//! state.set(2);
//! assert_eq!(*state.current(), 2);
//! assert_eq!(fired.get(), 1);
//! ```
//!
//! ### Scoped teardown
//!
//! ```rust
//! use lobby_vm::{Disposables, Emitter};
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! enum Event {
//!     Update,
//! }
//!
//! let emitter: Emitter<Event> = Emitter::new();
//! let mut disposables = Disposables::new();
//! disposables
//!     .track_listener(&emitter, Event::Update, || {})
//!     .unwrap();
//!
//! disposables.dispose();
//! assert!(disposables.is_disposed());
//! assert_eq!(emitter.listener_count(Event::Update), 0);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod disposables;
pub mod emitter;
pub mod snapshot;

pub use self::disposables::{Dispose, DisposeError, Disposables};
pub use self::emitter::{Emitter, EventSource, Subscription};
pub use self::snapshot::{Patch, Snapshot};
