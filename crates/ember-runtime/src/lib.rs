//! Ember Runtime - Frame loop infrastructure
//!
//! Provides the time capability the simulation reads from:
//! - `Clock` — read-only source of microsecond timestamps
//! - `SystemClock` — wall clock with pause and single-frame stepping
//! - `ManualClock` — externally driven clock for tests and headless runs

mod clock;

pub use clock::{Clock, ManualClock, SystemClock, FRAME_STEP_US};
