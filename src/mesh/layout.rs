//! Interleaved vertex record layouts.
//!
//! A [`VertexLayout`] describes one vertex record inside a flat, interleaved
//! vertex buffer: the stride between records and the byte offset of each
//! attribute the generator should write. Attributes that are absent from the
//! layout are neither computed nor written, so callers only pay (in memory and
//! time) for what their shader consumes.
//!
//! Offsets are given in bytes, like GPU vertex buffer layouts. The generator
//! writes `f32` data, so every offset and the stride must be 4-byte aligned.
//! Attributes do not have to be adjacent; a record may contain padding or
//! data owned by someone else, which is left untouched.
//!
//! # Example
//!
//! ```
//! use cone_mesh::mesh::{VertexAttribute, VertexLayout};
//!
//! // Position and texcoord only, with 4 bytes of padding in between.
//! let layout = VertexLayout::new(24)
//!     .with_attribute(VertexAttribute::position(0))
//!     .with_attribute(VertexAttribute::texcoord0(16));
//! assert!(layout.validate().is_ok());
//! assert!(layout.has_tex_coords());
//! assert!(!layout.has_normals());
//! ```

use std::sync::Arc;

use crate::error::{MeshError, MeshResult};

const FLOAT_SIZE: u32 = std::mem::size_of::<f32>() as u32;

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex normal (float3).
    Normal,
    /// Texture coordinates (float2).
    TexCoord0,
}

impl VertexAttributeSemantic {
    /// The format this semantic is always written in.
    pub fn format(&self) -> VertexAttributeFormat {
        match self {
            Self::Position | Self::Normal => VertexAttributeFormat::Float3,
            Self::TexCoord0 => VertexAttributeFormat::Float2,
        }
    }
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> u32 {
        self.components() * FLOAT_SIZE
    }

    /// Number of `f32` components.
    pub fn components(&self) -> u32 {
        match self {
            Self::Float2 => 2,
            Self::Float3 => 3,
        }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Byte offset within the vertex record.
    pub offset: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(semantic: VertexAttributeSemantic, offset: u32) -> Self {
        Self { semantic, offset }
    }

    /// Create a position attribute (float3).
    pub fn position(offset: u32) -> Self {
        Self::new(VertexAttributeSemantic::Position, offset)
    }

    /// Create a normal attribute (float3).
    pub fn normal(offset: u32) -> Self {
        Self::new(VertexAttributeSemantic::Normal, offset)
    }

    /// Create a texcoord0 attribute (float2).
    pub fn texcoord0(offset: u32) -> Self {
        Self::new(VertexAttributeSemantic::TexCoord0, offset)
    }

    /// Data format of this attribute.
    pub fn format(&self) -> VertexAttributeFormat {
        self.semantic.format()
    }
}

/// Describes the layout of one interleaved vertex record.
///
/// Layouts are usually wrapped in `Arc` and shared between meshes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertex records.
    pub stride: u32,
    /// The vertex attributes, at most one per semantic.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new layout with the given stride and no attributes.
    pub fn new(stride: u32) -> Self {
        Self {
            stride,
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check if this layout has a specific semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Get an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Whether normals will be written.
    pub fn has_normals(&self) -> bool {
        self.has_semantic(VertexAttributeSemantic::Normal)
    }

    /// Whether texture coordinates will be written.
    ///
    /// This also selects the side vertex count, since the texture seam needs
    /// its own column of vertices.
    pub fn has_tex_coords(&self) -> bool {
        self.has_semantic(VertexAttributeSemantic::TexCoord0)
    }

    /// Stride expressed in `f32` elements.
    pub fn stride_floats(&self) -> usize {
        (self.stride / FLOAT_SIZE) as usize
    }

    /// Offset of an attribute expressed in `f32` elements, if present.
    pub fn float_offset(&self, semantic: VertexAttributeSemantic) -> Option<usize> {
        self.get_attribute(semantic)
            .map(|attr| (attr.offset / FLOAT_SIZE) as usize)
    }

    /// Validate the layout for use with the `f32` mesh writers.
    ///
    /// The stride must be a non-zero multiple of 4, a position attribute must
    /// be present, and every attribute must be aligned and fit inside the
    /// stride. Each semantic may appear once and no two attributes may share
    /// bytes.
    pub fn validate(&self) -> MeshResult<()> {
        if self.stride == 0 || self.stride % FLOAT_SIZE != 0 {
            return Err(MeshError::InvalidStride(self.stride));
        }
        if !self.has_semantic(VertexAttributeSemantic::Position) {
            return Err(MeshError::MissingPosition);
        }
        for attr in &self.attributes {
            if attr.offset % FLOAT_SIZE != 0 {
                return Err(MeshError::MisalignedAttribute {
                    semantic: attr.semantic,
                    offset: attr.offset,
                });
            }
            let size = attr.format().size();
            if attr.offset.saturating_add(size) > self.stride {
                return Err(MeshError::AttributeOutOfStride {
                    semantic: attr.semantic,
                    offset: attr.offset,
                    size,
                    stride: self.stride,
                });
            }
        }

        for (i, attr) in self.attributes.iter().enumerate() {
            if self.attributes[..i]
                .iter()
                .any(|prev| prev.semantic == attr.semantic)
            {
                return Err(MeshError::DuplicateAttribute(attr.semantic));
            }
        }

        let mut sorted = self.attributes.clone();
        sorted.sort_by_key(|attr| attr.offset);
        for pair in sorted.windows(2) {
            if pair[0].offset + pair[0].format().size() > pair[1].offset {
                return Err(MeshError::OverlappingAttributes {
                    a: pair[0].semantic,
                    b: pair[1].semantic,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Common Layouts
// ============================================================================

impl VertexLayout {
    /// Position-only layout (12 bytes per vertex).
    pub fn position_only() -> Arc<Self> {
        Arc::new(
            Self::new(12)
                .with_attribute(VertexAttribute::position(0))
                .with_label("position_only"),
        )
    }

    /// Position + normal layout (24 bytes per vertex).
    pub fn position_normal() -> Arc<Self> {
        Arc::new(
            Self::new(24)
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::normal(12))
                .with_label("position_normal"),
        )
    }

    /// Position + texcoord layout (20 bytes per vertex).
    pub fn position_uv() -> Arc<Self> {
        Arc::new(
            Self::new(20)
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::texcoord0(12))
                .with_label("position_uv"),
        )
    }

    /// Position + normal + texcoord layout (32 bytes per vertex).
    pub fn position_normal_uv() -> Arc<Self> {
        Arc::new(
            Self::new(32)
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::normal(12))
                .with_attribute(VertexAttribute::texcoord0(24))
                .with_label("position_normal_uv"),
        )
    }
}
