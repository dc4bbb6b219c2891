//! Per-frame primitive output
//!
//! The game appends triangle fans to a [`FrameBuffer`] owned by the host. The
//! host uploads `vertices`/`indices` (both are `Pod`, so `bytemuck::cast_slice`
//! works directly), draws, and calls [`FrameBuffer::clear`] before the next frame.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

/// Vertex and index lists rebuilt from scratch every frame
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl FrameBuffer {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Drop all primitives, keeping the allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Number of triangles referenced by the index list
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes for a GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for a GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
