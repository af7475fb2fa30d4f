//! # cone-mesh
//!
//! Procedural cone geometry for real-time rendering.
//!
//! [`ConeMesh`](mesh::ConeMesh) turns a slice/stack/ring resolution into
//! interleaved vertex data (position, optional normal, optional texture
//! coordinates) and a triangle-list index buffer. The base is stored before
//! the side in both buffers so either part can be drawn on its own.
//!
//! GPU work is delegated to a [`RenderBase`](render::RenderBase)
//! implementation; [`ConeRenderer`](render::ConeRenderer) tracks when the
//! uploaded data is stale and re-uploads before drawing.
//!
//! ```
//! use cone_mesh::mesh::{ConeMesh, VertexLayout};
//!
//! let cone = ConeMesh::new(16, 4, 2);
//! let layout = VertexLayout::position_normal_uv();
//! let mut vertices = vec![0.0; cone.vertex_float_count(&layout)];
//! let mut indices = vec![0; cone.element_count()];
//! cone.fill(&mut vertices, &mut indices, &layout).unwrap();
//! assert_eq!(indices.len(), 3 * cone.triangle_count());
//! ```

pub mod error;
pub mod mesh;
pub mod render;

pub use error::{MeshError, MeshResult, RenderError, RenderResult};
pub use mesh::{ConeMesh, ConeResolution, CpuMesh, DrawRange, VertexLayout};
pub use render::{AttribLocations, ConeRenderer, DummyRenderBase, RenderBase};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version. Call once after installing a logger.
pub fn init() {
    log::info!("cone-mesh v{} initialized", VERSION);
}
