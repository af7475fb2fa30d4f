//! Rendering glue between mesh generators and a render base.
//!
//! GPU work (buffer allocation, attribute binding, draw calls) is owned by a
//! [`RenderBase`] implementation. Shape renderers such as [`ConeRenderer`]
//! compose one rather than inheriting from it: they produce the data, ask the
//! render base to upload it, and issue indexed draws over sub-ranges.

mod cone;
mod dummy;

use std::sync::Arc;

use crate::error::RenderResult;
use crate::mesh::{CpuMesh, DrawRange, PrimitiveTopology, VertexLayout};

pub use crate::mesh::LoadState;
pub use cone::ConeRenderer;
pub use dummy::{DrawCall, DummyRenderBase, UploadRecord};

/// Capability interface of the external render base.
pub trait RenderBase {
    /// Bind shader attribute locations and upload the mesh's vertex and index
    /// data, replacing anything uploaded before.
    fn register_attrib_locations(
        &mut self,
        mesh: &CpuMesh,
        locations: &AttribLocations,
    ) -> RenderResult<()>;

    /// Draw `range.count` elements of the uploaded index buffer starting at
    /// element `range.first`.
    fn render_indexed(&mut self, topology: PrimitiveTopology, range: DrawRange)
        -> RenderResult<()>;
}

/// Shader attribute locations for the generated vertex attributes.
///
/// Position is always bound. Leaving normal or texcoord unset means that
/// attribute is not generated at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttribLocations {
    pub position: u32,
    pub normal: Option<u32>,
    pub tex_coord: Option<u32>,
}

impl AttribLocations {
    /// Position only.
    pub fn new(position: u32) -> Self {
        Self {
            position,
            normal: None,
            tex_coord: None,
        }
    }

    pub fn with_normal(mut self, location: u32) -> Self {
        self.normal = Some(location);
        self
    }

    pub fn with_tex_coord(mut self, location: u32) -> Self {
        self.tex_coord = Some(location);
        self
    }

    /// Tightly packed interleaved layout holding exactly the bound attributes.
    pub fn layout(&self) -> Arc<VertexLayout> {
        match (self.normal.is_some(), self.tex_coord.is_some()) {
            (false, false) => VertexLayout::position_only(),
            (true, false) => VertexLayout::position_normal(),
            (false, true) => VertexLayout::position_uv(),
            (true, true) => VertexLayout::position_normal_uv(),
        }
    }
}

impl Default for AttribLocations {
    fn default() -> Self {
        Self {
            position: 0,
            normal: Some(1),
            tex_coord: Some(2),
        }
    }
}
