//! The fireworks scene: launch scheduling, the rolling burst window, and
//! per-frame geometry emission

use crate::buffer::FloatWriter;
use crate::config::FireworksConfig;
use crate::firework::{Firework, FireworkMode};
use crate::geometry::write_background;
use crate::random::RandomSource;
use crate::render::{render_flare_simple, render_flare_trail};
use ember_core::{TimeUs, Vec3};
use ember_runtime::Clock;
use std::collections::VecDeque;

const LAUNCH_X: (f32, f32) = (-0.8, 0.8);
const LAUNCH_Y: (f32, f32) = (0.0, 0.8);
/// Slightly in front of the background plane
const LAUNCH_Z: f32 = 0.1;

/// Peak writer usage since the last stats report, in floats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferStats {
    pub max_vertex_writes: usize,
    pub max_color_writes: usize,
}

/// Owns the live bursts and writes a frame's geometry on each `update`.
///
/// Not reentrant: the frame loop holds it exclusively and calls `update`
/// once per frame.
pub struct FireworkScene<C: Clock, R: RandomSource> {
    clock: C,
    rng: R,
    config: FireworksConfig,
    fireworks: VecDeque<Firework>,
    next_launch_time: TimeUs,
    next_stats_time: TimeUs,
    stats: BufferStats,
    /// Height / width of the viewport
    aspect_ratio: f32,
}

impl<C: Clock, R: RandomSource> FireworkScene<C, R> {
    /// The first `update` launches immediately.
    pub fn new(clock: C, rng: R, config: FireworksConfig) -> Self {
        let now = clock.now_us();
        Self {
            clock,
            rng,
            fireworks: VecDeque::with_capacity(config.max_fireworks + 1),
            next_launch_time: now,
            next_stats_time: now + config.stats_interval_us,
            stats: BufferStats::default(),
            aspect_ratio: 1.0,
            config,
        }
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        tracing::info!(target: "scene", "screen size change: {width} x {height}");
        if width > 0.0 && height > 0.0 {
            self.aspect_ratio = height / width;
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn config(&self) -> &FireworksConfig {
        &self.config
    }

    /// Live bursts, oldest first
    pub fn fireworks(&self) -> impl Iterator<Item = &Firework> {
        self.fireworks.iter()
    }

    pub fn firework_count(&self) -> usize {
        self.fireworks.len()
    }

    pub fn next_launch_time(&self) -> TimeUs {
        self.next_launch_time
    }

    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    /// Bursts whose flares have all burnt out but still hold a window slot
    pub fn spent_count(&self, now: TimeUs) -> usize {
        self.fireworks.iter().filter(|fw| fw.is_spent(now)).count()
    }

    /// Launch a burst at a random position and mode, evicting the oldest
    /// bursts beyond the window size. Eviction is by age, not liveness.
    pub fn launch(&mut self, now: TimeUs) {
        let pos = Vec3::new(
            self.rng.range(LAUNCH_X.0, LAUNCH_X.1),
            self.rng.range(LAUNCH_Y.0, LAUNCH_Y.1),
            LAUNCH_Z,
        );
        let mode = FireworkMode::ALL[self.rng.index(FireworkMode::ALL.len())];
        let fw = Firework::create(
            pos,
            mode,
            now,
            self.aspect_ratio,
            &self.config.burst,
            &mut self.rng,
        );
        self.fireworks.push_back(fw);
        while self.fireworks.len() > self.config.max_fireworks {
            self.fireworks.pop_front();
        }
        tracing::debug!(
            target: "scene",
            "launching {:?} at ({:.2}, {:.2}), {} live",
            mode,
            pos.x,
            pos.y,
            self.fireworks.len()
        );
    }

    /// Write one frame: background, then every burst's flares. Both writers
    /// advance by the same amount.
    pub fn update(&mut self, bv: &mut FloatWriter, bc: &mut FloatWriter) {
        let now = self.clock.now_us();

        if now > self.next_launch_time {
            self.launch(now);
            let jitter = self.rng.range_us(
                self.config.launch_interval_min_us,
                self.config.launch_interval_max_us,
            );
            self.next_launch_time = now + jitter;
        }

        write_background(bv, bc);

        for fw in &self.fireworks {
            match fw.mode() {
                FireworkMode::Simple => {
                    for flare in fw.flares() {
                        render_flare_simple(fw.pos(), flare, now, bv, bc);
                    }
                }
                FireworkMode::Trail => {
                    for flare in fw.flares() {
                        render_flare_trail(fw.pos(), flare, now, bv, bc);
                    }
                }
            }
        }

        self.record_stats(now, bv.position(), bc.position());
    }

    fn record_stats(&mut self, now: TimeUs, vertex_floats: usize, color_floats: usize) {
        self.stats.max_vertex_writes = self.stats.max_vertex_writes.max(vertex_floats);
        self.stats.max_color_writes = self.stats.max_color_writes.max(color_floats);
        if self.next_stats_time < now {
            tracing::info!(target: "scene", "stats: bv {}", self.stats.max_vertex_writes);
            tracing::info!(target: "scene", "stats: bc {}", self.stats.max_color_writes);
            tracing::info!(
                target: "scene",
                "stats: {} of {} fireworks spent",
                self.spent_count(now),
                self.fireworks.len()
            );
            self.next_stats_time = now + self.config.stats_interval_us;
            self.stats = BufferStats::default();
        }
    }
}
