//! Error types for mesh generation and rendering.

use thiserror::Error;

use crate::mesh::VertexAttributeSemantic;

/// Errors raised while validating a vertex layout or filling buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("invalid vertex stride {0}: must be a non-zero multiple of 4 bytes")]
    InvalidStride(u32),
    #[error("vertex layout has no position attribute")]
    MissingPosition,
    #[error("attribute {semantic:?} at byte offset {offset} is not 4-byte aligned")]
    MisalignedAttribute {
        semantic: VertexAttributeSemantic,
        offset: u32,
    },
    #[error("attribute {semantic:?} at byte offset {offset} ({size} bytes) overflows stride {stride}")]
    AttributeOutOfStride {
        semantic: VertexAttributeSemantic,
        offset: u32,
        size: u32,
        stride: u32,
    },
    #[error("attribute {0:?} appears more than once in the layout")]
    DuplicateAttribute(VertexAttributeSemantic),
    #[error("attributes {a:?} and {b:?} overlap")]
    OverlappingAttributes {
        a: VertexAttributeSemantic,
        b: VertexAttributeSemantic,
    },
    #[error("vertex buffer too small: need {required} floats, got {actual}")]
    VertexBufferTooSmall { required: usize, actual: usize },
    #[error("index buffer too small: need {required} indices, got {actual}")]
    IndexBufferTooSmall { required: usize, actual: usize },
}

pub type MeshResult<T> = Result<T, MeshError>;

/// Errors raised by the rendering glue and render base implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("attribute locations were never initialized")]
    NotInitialized,
    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),
    #[error("render base failure: {0}")]
    Backend(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::InvalidStride(6);
        assert_eq!(
            err.to_string(),
            "invalid vertex stride 6: must be a non-zero multiple of 4 bytes"
        );

        let err = MeshError::VertexBufferTooSmall {
            required: 32,
            actual: 8,
        };
        assert_eq!(err.to_string(), "vertex buffer too small: need 32 floats, got 8");
    }

    #[test]
    fn test_mesh_error_converts_into_render_error() {
        let err: RenderError = MeshError::MissingPosition.into();
        assert_eq!(err, RenderError::Mesh(MeshError::MissingPosition));
        assert_eq!(
            err.to_string(),
            "mesh generation failed: vertex layout has no position attribute"
        );
    }
}
