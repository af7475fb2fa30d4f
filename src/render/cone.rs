//! Cone rendering through a [`RenderBase`].

use crate::error::{RenderError, RenderResult};
use crate::mesh::{ConeMesh, ConeResolution, DrawRange, LoadState, PrimitiveTopology};

use super::{AttribLocations, RenderBase};

/// Renders a cone, regenerating and re-uploading its buffers when the
/// resolution changed since the last upload.
///
/// Usage:
/// 1. Create with [`new`](Self::new) (or change later with [`remesh`](Self::remesh)).
/// 2. Call [`initialize_attrib_locations`](Self::initialize_attrib_locations)
///    once; this uploads the first set of buffers.
/// 3. Call [`render`](Self::render), [`render_base`](Self::render_base) or
///    [`render_side`](Self::render_side).
///
/// Calling `remesh` before initialization avoids a wasted upload.
///
/// Deliberately not `Clone`: it stands for buffers owned by the render base.
#[derive(Debug, Default)]
pub struct ConeRenderer {
    mesh: ConeMesh,
    locations: Option<AttribLocations>,
}

impl ConeRenderer {
    pub fn new(slices: i32, stacks: i32, rings: i32) -> Self {
        Self {
            mesh: ConeMesh::new(slices, stacks, rings),
            locations: None,
        }
    }

    /// Change the resolution. See [`ConeMesh::set_resolution`].
    pub fn remesh(&mut self, slices: i32, stacks: i32, rings: i32) -> bool {
        self.mesh.set_resolution(slices, stacks, rings)
    }

    pub fn mesh(&self) -> &ConeMesh {
        &self.mesh
    }

    pub fn resolution(&self) -> ConeResolution {
        self.mesh.resolution()
    }

    pub fn slices(&self) -> u32 {
        self.mesh.slices()
    }

    pub fn stacks(&self) -> u32 {
        self.mesh.stacks()
    }

    pub fn rings(&self) -> u32 {
        self.mesh.rings()
    }

    pub fn load_state(&self) -> LoadState {
        self.mesh.load_state()
    }

    pub fn attrib_locations(&self) -> Option<AttribLocations> {
        self.locations
    }

    /// Set the shader attribute locations and upload the cone.
    ///
    /// Must be called before the first render call.
    pub fn initialize_attrib_locations<R: RenderBase + ?Sized>(
        &mut self,
        backend: &mut R,
        locations: AttribLocations,
    ) -> RenderResult<()> {
        self.locations = Some(locations);
        self.upload(backend)
    }

    /// Draw the whole cone.
    pub fn render<R: RenderBase + ?Sized>(&mut self, backend: &mut R) -> RenderResult<()> {
        let range = self.mesh.full_range();
        self.draw(backend, range)
    }

    /// Draw only the circular base.
    pub fn render_base<R: RenderBase + ?Sized>(&mut self, backend: &mut R) -> RenderResult<()> {
        let range = self.mesh.disk_range();
        self.draw(backend, range)
    }

    /// Draw only the side.
    pub fn render_side<R: RenderBase + ?Sized>(&mut self, backend: &mut R) -> RenderResult<()> {
        let range = self.mesh.side_range();
        self.draw(backend, range)
    }

    fn draw<R: RenderBase + ?Sized>(&mut self, backend: &mut R, range: DrawRange) -> RenderResult<()> {
        self.pre_render(backend)?;
        backend.render_indexed(PrimitiveTopology::TriangleList, range)
    }

    fn pre_render<R: RenderBase + ?Sized>(&mut self, backend: &mut R) -> RenderResult<()> {
        if self.locations.is_none() {
            return Err(RenderError::NotInitialized);
        }
        if !self.mesh.is_loaded() {
            self.upload(backend)?;
        }
        Ok(())
    }

    fn upload<R: RenderBase + ?Sized>(&mut self, backend: &mut R) -> RenderResult<()> {
        let locations = self.locations.ok_or(RenderError::NotInitialized)?;
        let cpu_mesh = self.mesh.generate(locations.layout())?;
        log::debug!(
            "uploading cone {}x{}x{}: {} vertices, {} elements",
            self.slices(),
            self.stacks(),
            self.rings(),
            cpu_mesh.vertex_count(),
            cpu_mesh.index_count()
        );
        backend.register_attrib_locations(&cpu_mesh, &locations)?;
        self.mesh.mark_loaded();
        Ok(())
    }
}
