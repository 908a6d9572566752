//! Flare launch parameters and the closed-form trajectory model

use ember_core::{Color4, TimeUs, Vec3, US_PER_SEC};

/// Constant downward acceleration, in clip-space units per second squared
pub const GRAVITY: f32 = -0.08;

/// Drag-damped flight distance along one axis.
///
/// `log10(1 + 10t)` grows quickly and then flattens, approximating a
/// velocity that tapers off under air resistance. Evaluated fresh at any
/// `t`, so there is no accumulated integration error.
fn flight(vel: f32, secs: f32) -> f32 {
    (1.0 + secs * 10.0).log10() * vel
}

/// One spark. Immutable after launch; position and color are recomputed
/// from elapsed time on every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flare {
    pub velocity_vec: Vec3,
    pub start_time: TimeUs,
    pub duration_secs: f32,
    /// How far back the plume trail reaches (trail mode only)
    pub trail_secs: f32,
    pub color: Color4,
    pub size: f32,
}

impl Flare {
    /// Seconds since launch; zero before launch
    pub fn elapsed_secs(&self, now: TimeUs) -> f32 {
        if now < self.start_time {
            return 0.0;
        }
        (now - self.start_time) as f32 / US_PER_SEC
    }

    /// Whether the flare has burnt out at `secs`
    pub fn is_dead_at(&self, secs: f32) -> bool {
        secs > self.duration_secs
    }

    /// World position at `secs` after launch from `origin`. Motion stays in
    /// the x/y plane; z is carried through for depth ordering.
    pub fn position_at(&self, secs: f32, origin: Vec3) -> Vec3 {
        let mut p = origin;
        p.x += flight(self.velocity_vec.x, secs);
        p.y += flight(self.velocity_vec.y, secs);
        p.y += GRAVITY / 2.0 * secs * secs;
        p
    }

    /// Color at `secs`: alpha fades linearly to zero over the lifetime
    pub fn color_at(&self, secs: f32) -> Color4 {
        let percent = secs / self.duration_secs;
        let mut c = self.color;
        c.a *= 1.0 - percent;
        c
    }
}
