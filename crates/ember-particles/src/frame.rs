//! Frame driver: owns the vertex/color regions and runs one scene update
//! per frame, the way a GPU renderer would around its draw call

use crate::buffer::FloatWriter;
use crate::random::RandomSource;
use crate::scene::FireworkScene;
use ember_core::{EmberError, Result};
use ember_runtime::Clock;
use serde::Serialize;

/// Floats per vertex (x, y, z, w)
pub const FLOATS_PER_VERTEX: usize = 4;

/// What one frame wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutput {
    /// Floats written to each region
    pub floats: usize,
    /// Vertices to submit as a plain triangle list
    pub vertex_count: usize,
}

/// Written geometry of one frame, for dumping
#[derive(Debug, Serialize)]
pub struct FrameSnapshot<'a> {
    pub vertex_count: usize,
    pub positions: &'a [f32],
    pub colors: &'a [f32],
}

/// Two equally sized float regions standing in for mapped GPU buffers
pub struct FrameBuffers {
    vertices: Vec<f32>,
    colors: Vec<f32>,
    written: usize,
}

impl FrameBuffers {
    pub fn new(buffer_bytes: usize) -> Result<Self> {
        let capacity = buffer_bytes / std::mem::size_of::<f32>();
        if capacity == 0 {
            return Err(EmberError::InvalidCapacity(capacity));
        }
        Ok(Self {
            vertices: vec![0.0; capacity],
            colors: vec![0.0; capacity],
            written: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Reset both cursors, let the scene write, and check the two regions
    /// ended in step.
    pub fn render_frame<C: Clock, R: RandomSource>(
        &mut self,
        scene: &mut FireworkScene<C, R>,
    ) -> Result<FrameOutput> {
        let mut bv = FloatWriter::new(&mut self.vertices)?;
        let mut bc = FloatWriter::new(&mut self.colors)?;
        scene.update(&mut bv, &mut bc);

        let (vertices, colors) = (bv.position(), bc.position());
        if vertices != colors {
            tracing::error!(target: "frame", "parity lost: bv {vertices} bc {colors}");
            return Err(EmberError::ParityViolation { vertices, colors });
        }
        self.written = vertices;
        Ok(FrameOutput {
            floats: vertices,
            vertex_count: vertices / FLOATS_PER_VERTEX,
        })
    }

    /// Positions written by the last frame
    pub fn vertices(&self) -> &[f32] {
        &self.vertices[..self.written]
    }

    /// Colors written by the last frame
    pub fn colors(&self) -> &[f32] {
        &self.colors[..self.written]
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            vertex_count: self.written / FLOATS_PER_VERTEX,
            positions: self.vertices(),
            colors: self.colors(),
        }
    }
}
