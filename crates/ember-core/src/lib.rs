//! Ember Core - Foundational types for the Ember fireworks renderer
//!
//! This crate provides the core types that all other Ember crates depend on:
//! - `Vec3`, `Color4` - Spatial and color value types
//! - `TimeUs` - Microsecond timestamps
//! - Error types and Result alias

mod error;
mod types;

pub use error::{EmberError, Result};
pub use types::{Color4, TimeUs, Vec3, US_PER_SEC};
