//! The two flare rendering strategies

use crate::buffer::FloatWriter;
use crate::flare::Flare;
use crate::geometry::{emit_triangle, Orientation};
use ember_core::{TimeUs, Vec3};

/// Final stretch of a simple flare's life drawn at full alpha
pub const FLASH_SECS: f32 = 0.1;

/// Time between plume samples. Smaller steps flicker as the dots move.
pub const PLUME_STEP_SECS: f32 = 0.02;
pub const PLUME_FADE: f32 = 0.90;
pub const PLUME_SHRINK: f32 = 0.95;

/// Point mode: an upright and an inverted triangle at the current position
pub fn render_flare_simple(
    origin: Vec3,
    flare: &Flare,
    now: TimeUs,
    bv: &mut FloatWriter,
    bc: &mut FloatWriter,
) {
    let secs = flare.elapsed_secs(now);
    if flare.is_dead_at(secs) {
        return;
    }
    let p = flare.position_at(secs, origin);
    let mut color = flare.color_at(secs);
    if secs > flare.duration_secs - FLASH_SECS {
        color.a = 1.0;
    }
    emit_triangle(bv, bc, p, flare.size, Orientation::Upright, color);
    emit_triangle(bv, bc, p, flare.size, Orientation::Inverted, color);
}

/// Plume mode: walk back along the trajectory, drawing a shrinking, fading
/// triangle per step until the trail length or launch time is reached.
pub fn render_flare_trail(
    origin: Vec3,
    flare: &Flare,
    now: TimeUs,
    bv: &mut FloatWriter,
    bc: &mut FloatWriter,
) {
    let mut secs = flare.elapsed_secs(now);
    if flare.is_dead_at(secs) {
        return;
    }
    let mut color = flare.color_at(secs);
    let mut size = flare.size;
    let mut plume_secs = 0.0;
    let mut first = true;

    loop {
        let p = flare.position_at(secs, origin);
        emit_triangle(bv, bc, p, size, Orientation::Upright, color);
        if first {
            // Fills the gap at the head of the trail
            emit_triangle(bv, bc, p, size, Orientation::Inverted, color);
            first = false;
        }

        size *= PLUME_SHRINK;
        color.a *= PLUME_FADE;
        secs -= PLUME_STEP_SECS;
        plume_secs += PLUME_STEP_SECS;
        if secs < 0.0 || plume_secs > flare.trail_secs {
            return;
        }
    }
}
