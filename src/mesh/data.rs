//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`PrimitiveTopology`] - How indices are assembled into primitives
//! - [`DrawRange`] - A contiguous sub-range of the index buffer
//! - [`CpuMesh`] - Filled vertex and index data plus its layout

use std::sync::Arc;

use super::layout::VertexLayout;

/// Primitive topology describing how vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
}

impl PrimitiveTopology {
    /// Get the number of vertices per primitive.
    pub fn vertices_per_primitive(&self) -> u32 {
        match self {
            Self::TriangleList => 3,
        }
    }
}

/// A contiguous range of elements in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DrawRange {
    /// First element to draw.
    pub first: u32,
    /// Number of elements to draw.
    pub count: u32,
}

impl DrawRange {
    pub fn new(first: u32, count: u32) -> Self {
        Self { first, count }
    }

    /// One past the last element.
    pub fn end(&self) -> u32 {
        self.first + self.count
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.first as usize..self.end() as usize
    }
}

/// A CPU-side mesh holding interleaved `f32` vertex data and `u32` indices.
///
/// Produced by generators and handed to a render base for upload. Named
/// sub-ranges of the index buffer (for example the base and side of a cone)
/// can be attached so they can be drawn separately.
#[derive(Clone)]
pub struct CpuMesh {
    layout: Arc<VertexLayout>,
    topology: PrimitiveTopology,
    vertices: Vec<f32>,
    vertex_count: u32,
    indices: Vec<u32>,
    ranges: Vec<(String, DrawRange)>,
    label: Option<String>,
}

impl CpuMesh {
    /// Create a new empty CpuMesh with the given layout.
    pub fn new(layout: Arc<VertexLayout>) -> Self {
        Self {
            layout,
            topology: PrimitiveTopology::TriangleList,
            vertices: Vec::new(),
            vertex_count: 0,
            indices: Vec::new(),
            ranges: Vec::new(),
            label: None,
        }
    }

    /// Set interleaved vertex data.
    ///
    /// Vertex count is inferred from the data length and the layout stride.
    pub fn with_vertices(mut self, data: Vec<f32>) -> Self {
        let stride = self.layout.stride_floats();
        if stride > 0 {
            self.vertex_count = (data.len() / stride) as u32;
        }
        self.vertices = data;
        self
    }

    /// Set index data.
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = indices;
        self
    }

    /// Attach a named draw range.
    pub fn with_range(mut self, name: impl Into<String>, range: DrawRange) -> Self {
        self.ranges.push((name.into(), range));
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertex layout.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// Get the primitive topology.
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Interleaved vertex data.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Vertex data as bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Index data.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Index data as bytes, ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Range covering the whole index buffer.
    pub fn full_range(&self) -> DrawRange {
        DrawRange::new(0, self.index_count())
    }

    /// Look up a named draw range.
    pub fn range(&self, name: &str) -> Option<DrawRange> {
        self.ranges
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, range)| *range)
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl std::fmt::Debug for CpuMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuMesh")
            .field("label", &self.label)
            .field("topology", &self.topology)
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.indices.len())
            .field("ranges", &self.ranges)
            .field("layout", &self.layout.label)
            .finish()
    }
}
