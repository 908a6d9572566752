//! Ember Particles - fireworks simulation and geometry emission
//!
//! Regenerates a flat vertex/color buffer every frame from a pool of
//! closed-form flare trajectories:
//! - `FloatWriter` — bounded append cursor over a mapped float region
//! - `Flare` — immutable launch parameters with position/color as a
//!   function of elapsed time
//! - `Firework` — a burst of flares sharing an origin and rendering mode
//! - `FireworkScene` — launch scheduling, the rolling burst window, and
//!   per-frame emission into paired position/color writers
//! - `FrameBuffers` — owns both regions and runs one update per frame

pub mod buffer;
pub mod config;
pub mod firework;
pub mod flare;
pub mod frame;
pub mod geometry;
pub mod random;
pub mod render;
pub mod scene;

pub use buffer::FloatWriter;
pub use config::{BurstConfig, FireworksConfig};
pub use firework::{Firework, FireworkMode};
pub use flare::Flare;
pub use frame::{FrameBuffers, FrameOutput, FrameSnapshot};
pub use random::{RandomSource, SeededRandom};
pub use scene::{BufferStats, FireworkScene};
