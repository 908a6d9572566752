//! Bounded append-only cursor over an externally owned float region

use ember_core::{Color4, EmberError, Result, Vec3};

/// Append cursor over a pre-allocated float region (a mapped vertex or
/// color buffer). `position` only moves forward and never passes the end
/// of the region.
///
/// Checked appends silently drop what does not fit, so a frame that runs
/// out of room loses geometry instead of failing.
pub struct FloatWriter<'a> {
    data: &'a mut [f32],
    position: usize,
}

impl<'a> FloatWriter<'a> {
    /// Wrap a float region. Fails on an empty region.
    pub fn new(data: &'a mut [f32]) -> Result<Self> {
        if data.is_empty() {
            return Err(EmberError::InvalidCapacity(0));
        }
        Ok(Self { data, position: 0 })
    }

    /// View a raw byte region as floats. Capacity is `len / 4`; a trailing
    /// partial float is ignored.
    pub fn from_bytes(bytes: &'a mut [u8]) -> Result<Self> {
        let usable = bytes.len() - bytes.len() % std::mem::size_of::<f32>();
        let floats: &mut [f32] = bytemuck::try_cast_slice_mut(&mut bytes[..usable])
            .map_err(|e| EmberError::BufferAlignment(format!("{e:?}")))?;
        Self::new(floats)
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of floats written so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn has_room(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Append one float; no-op when full
    pub fn append(&mut self, v: f32) {
        if !self.has_room(1) {
            return;
        }
        self.append_unchecked(v);
    }

    /// Append x, y, z. Each component is checked on its own, so a nearly
    /// full writer can take a partial vector.
    pub fn append_vec3(&mut self, v: Vec3) {
        self.append(v.x);
        self.append(v.y);
        self.append(v.z);
    }

    /// Append r, g, b, a with the same per-component policy as `append_vec3`
    pub fn append_color(&mut self, c: Color4) {
        self.append(c.r);
        self.append(c.g);
        self.append(c.b);
        self.append(c.a);
    }

    /// Append without the capacity policy. The caller must have checked
    /// `has_room` for the whole batch; an overflow here panics.
    #[inline]
    pub fn append_unchecked(&mut self, v: f32) {
        debug_assert!(self.position < self.data.len());
        self.data[self.position] = v;
        self.position += 1;
    }

    #[inline]
    pub fn append_unchecked_color4(&mut self, c: Color4) {
        self.append_unchecked(c.r);
        self.append_unchecked(c.g);
        self.append_unchecked(c.b);
        self.append_unchecked(c.a);
    }

    /// The written prefix of the region
    pub fn written(&self) -> &[f32] {
        &self.data[..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_is_rejected() {
        let mut data: [f32; 0] = [];
        assert!(matches!(
            FloatWriter::new(&mut data),
            Err(EmberError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn append_stops_at_capacity() {
        let mut data = [0.0f32; 3];
        let mut w = FloatWriter::new(&mut data).unwrap();
        for i in 0..10 {
            w.append(i as f32);
            assert!(w.position() <= w.capacity());
        }
        assert_eq!(w.position(), 3);
        assert_eq!(w.remaining(), 0);
        w.append(99.0);
        assert_eq!(w.position(), 3);
        assert_eq!(w.written(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn partial_vector_writes_what_fits() {
        let mut data = [0.0f32; 5];
        let mut w = FloatWriter::new(&mut data).unwrap();
        w.append_vec3(Vec3::new(1.0, 2.0, 3.0));
        w.append_vec3(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(w.position(), 5);
        assert_eq!(w.written(), &[1.0, 2.0, 3.0, 4.0, 5.0]);

        let mut data = [0.0f32; 1];
        let mut w = FloatWriter::new(&mut data).unwrap();
        w.append_vec3(Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(w.written(), &[7.0]);
    }

    #[test]
    fn partial_color_writes_what_fits() {
        let mut data = [0.0f32; 6];
        let mut w = FloatWriter::new(&mut data).unwrap();
        w.append_color(Color4::new(0.1, 0.2, 0.3, 0.4));
        w.append_color(Color4::new(0.5, 0.6, 0.7, 0.8));
        assert_eq!(w.written(), &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    }

    #[test]
    fn unchecked_color_writes_four_floats() {
        let mut data = [0.0f32; 8];
        let mut w = FloatWriter::new(&mut data).unwrap();
        assert!(w.has_room(4));
        w.append_unchecked_color4(Color4::new(1.0, 0.5, 0.25, 2.0));
        assert_eq!(w.written(), &[1.0, 0.5, 0.25, 2.0]);
        assert!(w.has_room(4));
        assert!(!w.has_room(5));
    }

    #[test]
    fn from_bytes_uses_whole_floats_only() {
        let mut region = vec![0.0f32; 4];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(region.as_mut_slice());
        let w = FloatWriter::from_bytes(&mut bytes[..15]).unwrap();
        assert_eq!(w.capacity(), 3);
    }

    #[test]
    fn from_bytes_rejects_tiny_region() {
        let mut region = vec![0.0f32; 1];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(region.as_mut_slice());
        assert!(matches!(
            FloatWriter::from_bytes(&mut bytes[..3]),
            Err(EmberError::InvalidCapacity(0))
        ));
    }
}
