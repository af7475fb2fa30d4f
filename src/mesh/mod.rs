//! CPU-side mesh types and the cone generator.
//!
//! - [`VertexLayout`] - Describes one interleaved vertex record
//! - [`CpuMesh`] - Filled vertex and index data with named draw ranges
//! - [`ConeMesh`] - Cone generator (resolution, count queries, fill)

pub mod cone;
mod data;
mod layout;

pub use cone::{ConeCounts, ConeMesh, ConeResolution, LoadState, BASE_RANGE, SIDE_RANGE};
pub use data::{CpuMesh, DrawRange, PrimitiveTopology};
pub use layout::{VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout};
