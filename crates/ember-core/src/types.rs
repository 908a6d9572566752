//! Spatial, color and time types

use serde::{Deserialize, Serialize};

/// Microsecond timestamp. Elapsed arithmetic is done in this unit and only
/// converted to seconds at the motion model boundary.
pub type TimeUs = u64;

pub const US_PER_SEC: f32 = 1_000_000.0;

/// A 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// RGBA color. Components are not clamped here; values above 1.0 are left
/// for the rendering surface to saturate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color4 {
    fn default() -> Self {
        Self::WHITE
    }
}
