//! Headless simulation run

use anyhow::{Context, Result};
use ember_core::US_PER_SEC;
use ember_particles::{FireworkScene, FireworksConfig, FrameBuffers, SeededRandom};
use ember_runtime::ManualClock;

pub struct SimulateArgs {
    pub frames: u32,
    pub fps: u32,
    pub width: f32,
    pub height: f32,
    pub config: Option<String>,
    pub seed: Option<u64>,
    pub dump: Option<String>,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => FireworksConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => FireworksConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("Invalid config")?;

    let rng = match config.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    let mut buffers =
        FrameBuffers::new(config.buffer_bytes).context("Failed to allocate frame buffers")?;
    let mut scene = FireworkScene::new(ManualClock::new(0), rng, config);
    scene.set_screen_size(args.width, args.height);

    let step_us = (US_PER_SEC / args.fps as f32).round() as i64;
    tracing::info!(target: "cli", "simulating {} frames at {} fps", args.frames, args.fps);
    let mut peak_vertices = 0;
    let mut total_vertices: u64 = 0;

    for _ in 0..args.frames {
        scene.clock().advance(step_us);
        let out = buffers.render_frame(&mut scene)?;
        peak_vertices = peak_vertices.max(out.vertex_count);
        total_vertices += out.vertex_count as u64;
    }

    let mean = if args.frames > 0 {
        total_vertices / args.frames as u64
    } else {
        0
    };
    println!("Frames:          {}", args.frames);
    println!("Simulated time:  {:.2}s", args.frames as f32 / args.fps as f32);
    println!("Fireworks live:  {}", scene.firework_count());
    println!("Peak vertices:   {}", peak_vertices);
    println!("Mean vertices:   {}", mean);
    println!(
        "Buffer capacity: {} vertices",
        buffers.capacity() / ember_particles::frame::FLOATS_PER_VERTEX
    );

    if let Some(path) = &args.dump {
        let json = serde_json::to_string_pretty(&buffers.snapshot())
            .context("Failed to serialize frame")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
        println!("Last frame written to {}", path);
    }

    Ok(())
}
