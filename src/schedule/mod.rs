//! Deferred tasks on a caller-driven clock.
//!
//! The engine never sleeps or spawns. The front end advances the clock and
//! the controller polls its slots, so the same code runs under a browser
//! timer, a terminal loop, or a test that jumps time forward.

mod deferred;

pub use deferred::{DeferredSlot, TaskId};
