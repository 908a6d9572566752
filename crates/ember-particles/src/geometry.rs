//! Triangle synthesis into paired position/color writers.
//!
//! Positions are written as x, y, z, w (w = 1) per vertex, colors as r, g,
//! b, a per vertex, so a triangle is 12 floats in each writer.

use crate::buffer::FloatWriter;
use ember_core::{Color4, Vec3};

/// Floats per triangle in either writer (3 vertices x 4 components)
pub const TRIANGLE_FLOATS: usize = 12;

/// Which way the triangle's apex points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Inverted,
}

/// Write one triangle centered on `pos` with half-width `size`.
/// All-or-nothing: returns false and writes nothing without 12 floats of room.
pub fn write_triangle(b: &mut FloatWriter, pos: Vec3, size: f32, orientation: Orientation) -> bool {
    if !b.has_room(TRIANGLE_FLOATS) {
        return false;
    }
    let apex_y = match orientation {
        Orientation::Upright => pos.y + size,
        Orientation::Inverted => pos.y - size,
    };
    for (x, y) in [(pos.x - size, pos.y), (pos.x + size, pos.y), (pos.x, apex_y)] {
        b.append_unchecked(x);
        b.append_unchecked(y);
        b.append_unchecked(pos.z);
        b.append_unchecked(1.0);
    }
    true
}

/// Write one color for each of a triangle's three vertices. All-or-nothing.
pub fn write_triangle_color(b: &mut FloatWriter, color: Color4) -> bool {
    if !b.has_room(TRIANGLE_FLOATS) {
        return false;
    }
    for _ in 0..3 {
        b.append_unchecked_color4(color);
    }
    true
}

/// Write a triangle and its colors, or neither. Checks both writers up
/// front so the two cursors stay in step.
pub fn emit_triangle(
    bv: &mut FloatWriter,
    bc: &mut FloatWriter,
    pos: Vec3,
    size: f32,
    orientation: Orientation,
    color: Color4,
) -> bool {
    if !bv.has_room(TRIANGLE_FLOATS) || !bc.has_room(TRIANGLE_FLOATS) {
        return false;
    }
    write_triangle(bv, pos, size, orientation) && write_triangle_color(bc, color)
}

const BACKGROUND_VERTICES: [[f32; 4]; 6] = [
    [-1.0, -1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, 1.0],
];

/// Two opaque black triangles covering clip space. A short writer gets a
/// truncated background rather than none; truncation happens a whole vertex
/// at a time and only while both writers have room, so the cursors stay in
/// step and on vertex boundaries.
pub fn write_background(bv: &mut FloatWriter, bc: &mut FloatWriter) {
    for vertex in BACKGROUND_VERTICES {
        if !bv.has_room(vertex.len()) || !bc.has_room(vertex.len()) {
            return;
        }
        for f in vertex {
            bv.append(f);
        }
        bc.append_color(Color4::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangles_fill_then_third_is_skipped() {
        let mut data = [0.0f32; 24];
        let mut b = FloatWriter::new(&mut data).unwrap();
        let p = Vec3::new(0.0, 0.0, 0.1);
        assert!(write_triangle(&mut b, p, 0.01, Orientation::Upright));
        assert!(write_triangle(&mut b, p, 0.01, Orientation::Inverted));
        assert_eq!(b.position(), 24);
        assert!(!write_triangle(&mut b, p, 0.01, Orientation::Upright));
        assert_eq!(b.position(), 24);
    }

    #[test]
    fn short_writer_gets_no_partial_triangle() {
        let mut data = [0.0f32; 11];
        let mut b = FloatWriter::new(&mut data).unwrap();
        assert!(!write_triangle(&mut b, Vec3::ZERO, 0.01, Orientation::Upright));
        assert!(!write_triangle_color(&mut b, Color4::WHITE));
        assert_eq!(b.position(), 0);
    }

    #[test]
    fn triangle_vertex_layout() {
        let mut data = [0.0f32; 12];
        let mut b = FloatWriter::new(&mut data).unwrap();
        write_triangle(&mut b, Vec3::new(0.5, 0.5, 0.1), 0.25, Orientation::Inverted);
        assert_eq!(
            b.written(),
            &[0.25, 0.5, 0.1, 1.0, 0.75, 0.5, 0.1, 1.0, 0.5, 0.25, 0.1, 1.0]
        );
    }

    #[test]
    fn emit_keeps_parity_when_one_side_is_short() {
        let mut vdata = [0.0f32; 24];
        let mut cdata = [0.0f32; 20];
        let mut bv = FloatWriter::new(&mut vdata).unwrap();
        let mut bc = FloatWriter::new(&mut cdata).unwrap();
        let c = Color4::new(1.0, 0.0, 0.0, 1.0);
        assert!(emit_triangle(&mut bv, &mut bc, Vec3::ZERO, 0.01, Orientation::Upright, c));
        assert_eq!(bv.position(), bc.position());
        assert!(!emit_triangle(&mut bv, &mut bc, Vec3::ZERO, 0.01, Orientation::Upright, c));
        assert_eq!(bv.position(), 12);
        assert_eq!(bc.position(), 12);
    }

    #[test]
    fn background_is_two_black_triangles() {
        let mut vdata = [0.0f32; 64];
        let mut cdata = [0.0f32; 64];
        let mut bv = FloatWriter::new(&mut vdata).unwrap();
        let mut bc = FloatWriter::new(&mut cdata).unwrap();
        write_background(&mut bv, &mut bc);
        assert_eq!(bv.position(), 24);
        assert_eq!(bc.position(), 24);
        assert!(bc.written().chunks(4).all(|c| c == [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn background_truncates_to_whole_vertices() {
        let mut vdata = [0.0f32; 10];
        let mut cdata = [0.0f32; 10];
        let mut bv = FloatWriter::new(&mut vdata).unwrap();
        let mut bc = FloatWriter::new(&mut cdata).unwrap();
        write_background(&mut bv, &mut bc);
        assert_eq!(bv.position(), 8);
        assert_eq!(bc.position(), 8);
        assert_eq!(&bv.written()[..4], &[-1.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn background_stops_at_the_shorter_writer() {
        let mut vdata = [0.0f32; 4096];
        let mut cdata = [0.0f32; 20];
        let mut bv = FloatWriter::new(&mut vdata).unwrap();
        let mut bc = FloatWriter::new(&mut cdata).unwrap();
        write_background(&mut bv, &mut bc);
        assert_eq!(bv.position(), 16);
        assert_eq!(bc.position(), 16);
    }
}
