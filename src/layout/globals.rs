//! Global frame uniform layout (shared header)

use bytemuck::{Pod, Zeroable};

/// Time and frame counters declared by the shared header.
/// Total size: 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GlobalsUniform {
    /// Seconds since startup
    pub time: f32,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Frame counter
    pub frame: u32,
    pub _pad: u32,
}

impl GlobalsUniform {
    pub fn new(time: f32, delta_time: f32, frame: u32) -> Self {
        Self {
            time,
            delta_time,
            frame,
            _pad: 0,
        }
    }

    /// Advance to the next frame.
    pub fn tick(&mut self, delta_time: f32) {
        self.time += delta_time;
        self.delta_time = delta_time;
        self.frame = self.frame.wrapping_add(1);
    }
}
