use glam::Mat4;

/// Quad vertex data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4, 2 => Float32x2];

    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// The quad, as a triangle strip. Texture coordinates span the left half
/// of the image; the shader flips to the right half to animate.
pub const QUAD_VERTICES: &[Vertex] = &[
    Vertex { position: [-0.5, 0.5, 0.0], color: [1.0, 0.0, 0.0, 1.0], uv: [0.0, 0.0] },
    Vertex { position: [0.5, 0.5, 0.0], color: [1.0, 0.0, 0.0, 1.0], uv: [0.5, 0.0] },
    Vertex { position: [-0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0, 1.0], uv: [0.0, 1.0] },
    Vertex { position: [0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0, 1.0], uv: [0.5, 1.0] },
];

/// Per-frame uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub mvp: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32,
}

impl FrameUniforms {
    pub fn new(mvp: Mat4, resolution: [f32; 2], time: f32) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            resolution,
            time,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_matches_attributes() {
        // 3 + 4 + 2 floats, tightly packed
        assert_eq!(std::mem::size_of::<Vertex>(), 9 * 4);
    }

    #[test]
    fn quad_is_four_vertices() {
        assert_eq!(QUAD_VERTICES.len(), 4);
        for vertex in QUAD_VERTICES {
            assert_eq!(vertex.position[2], 0.0, "quad lies in the z=0 plane");
            assert!(vertex.uv[0] <= 0.5, "base coordinates stay in the left half");
        }
    }

    #[test]
    fn frame_uniforms_layout_is_wgsl_compatible() {
        // mat4x4 (64) + vec2 (8) + f32 (4) + pad (4), a 16-byte multiple
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 80);
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
    }

    #[test]
    fn frame_uniforms_pack_columns() {
        let mvp = Mat4::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ]);
        let uniforms = FrameUniforms::new(mvp, [800.0, 800.0], 1.25);

        assert_eq!(uniforms.mvp[0], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(uniforms.mvp[3], [13.0, 14.0, 15.0, 16.0]);
        assert_eq!(uniforms.resolution, [800.0, 800.0]);
        assert_eq!(uniforms.time, 1.25);
    }
}
