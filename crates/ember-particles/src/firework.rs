//! Firework bursts: a shared origin plus a batch of flares

use crate::config::BurstConfig;
use crate::flare::Flare;
use crate::random::RandomSource;
use ember_core::{Color4, TimeUs, Vec3};

/// Velocity tuning applied to the unit launch direction
pub const VELOCITY: f32 = 0.3;

/// Base palette a burst picks its color from
pub const PALETTE: [Color4; 7] = [
    Color4::new(1.0, 0.0, 0.0, 1.0),
    Color4::new(0.0, 1.0, 0.0, 1.0),
    Color4::new(1.0, 1.0, 0.0, 1.0),
    Color4::new(0.0, 1.0, 1.0, 1.0),
    Color4::new(1.0, 0.0, 0.5, 1.0),
    Color4::new(1.0, 0.0, 1.0, 1.0),
    Color4::new(1.0, 0.2, 0.2, 1.0),
];

const COLOR_JITTER: f32 = 0.3;
// Above 1.0 on purpose: the surface saturates, which biases bursts opaque
const ALPHA_RANGE: (f32, f32) = (0.7, 4.0);
const DURATION_RANGE: (f32, f32) = (0.5, 3.0);
const TRAIL_RANGE: (f32, f32) = (0.3, 0.7);
const SIZE_RANGE: (f32, f32) = (0.003, 0.005);

/// How a burst's flares are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworkMode {
    /// One point per flare
    Simple,
    /// A fading plume behind each flare
    Trail,
}

impl FireworkMode {
    pub const ALL: [FireworkMode; 2] = [FireworkMode::Simple, FireworkMode::Trail];
}

/// One burst. Flares are generated at construction and never change.
#[derive(Debug, Clone)]
pub struct Firework {
    pos: Vec3,
    mode: FireworkMode,
    start_time: TimeUs,
    flares: Vec<Flare>,
}

impl Firework {
    /// Generate a burst at `pos`. `aspect_x` (height / width) squeezes the
    /// horizontal velocity so bursts stay round on non-square viewports.
    pub fn create(
        pos: Vec3,
        mode: FireworkMode,
        start_time: TimeUs,
        aspect_x: f32,
        config: &BurstConfig,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let palette = if config.palette.is_empty() {
            &PALETTE[..]
        } else {
            &config.palette[..]
        };
        let base = palette[rng.index(palette.len())];
        let count = config.flares_per_firework.max(1);
        let mut flares = Vec::with_capacity(count);

        for _ in 0..count {
            let mut velocity = rng.unit_vector();
            velocity.z = 0.0;
            velocity.x *= aspect_x;
            velocity.x *= VELOCITY;
            velocity.y *= VELOCITY;

            let mut color = base;
            color.r += rng.range(-COLOR_JITTER, COLOR_JITTER);
            color.g += rng.range(-COLOR_JITTER, COLOR_JITTER);
            color.b += rng.range(-COLOR_JITTER, COLOR_JITTER);
            color.a = rng.range(ALPHA_RANGE.0, ALPHA_RANGE.1);

            flares.push(Flare {
                velocity_vec: velocity,
                start_time,
                duration_secs: rng.range(DURATION_RANGE.0, DURATION_RANGE.1),
                trail_secs: rng.range(TRAIL_RANGE.0, TRAIL_RANGE.1),
                color,
                size: rng.range(SIZE_RANGE.0, SIZE_RANGE.1),
            });
        }

        Self {
            pos,
            mode,
            start_time,
            flares,
        }
    }

    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    pub fn mode(&self) -> FireworkMode {
        self.mode
    }

    pub fn start_time(&self) -> TimeUs {
        self.start_time
    }

    pub fn flares(&self) -> &[Flare] {
        &self.flares
    }

    /// True once every flare has burnt out
    pub fn is_spent(&self, now: TimeUs) -> bool {
        self.flares
            .iter()
            .all(|f| f.is_dead_at(f.elapsed_secs(now)))
    }
}
