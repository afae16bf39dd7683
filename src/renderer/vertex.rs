//! Vertex type for the GPU backend

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Map from canvas pixels (origin top-left, y down) to clip space
    pub fn to_ndc(self, width: f32, height: f32) -> Self {
        let [x, y] = self.position;
        Self::new(x / width * 2.0 - 1.0, 1.0 - y / height * 2.0, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc_corners() {
        let c = [1.0; 4];
        assert_eq!(Vertex::new(0.0, 0.0, c).to_ndc(200.0, 100.0).position, [-1.0, 1.0]);
        assert_eq!(Vertex::new(200.0, 100.0, c).to_ndc(200.0, 100.0).position, [1.0, -1.0]);
        assert_eq!(Vertex::new(100.0, 50.0, c).to_ndc(200.0, 100.0).position, [0.0, 0.0]);
    }
}
