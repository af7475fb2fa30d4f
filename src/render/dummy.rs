//! Dummy render base for testing and headless use.
//!
//! This render base doesn't touch a GPU. It keeps a copy of every upload and
//! a log of every draw so callers can inspect what would have been sent.

use crate::error::{RenderError, RenderResult};
use crate::mesh::{CpuMesh, DrawRange, PrimitiveTopology};

use super::{AttribLocations, RenderBase};

/// One call to [`RenderBase::register_attrib_locations`].
#[derive(Debug, Clone)]
pub struct UploadRecord {
    pub mesh: CpuMesh,
    pub locations: AttribLocations,
}

/// One call to [`RenderBase::render_indexed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: PrimitiveTopology,
    pub range: DrawRange,
}

/// Dummy render base.
#[derive(Debug, Default)]
pub struct DummyRenderBase {
    uploads: Vec<UploadRecord>,
    draws: Vec<DrawCall>,
}

impl DummyRenderBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the render base name.
    pub fn name(&self) -> &'static str {
        "Dummy Render Base"
    }

    pub fn uploads(&self) -> &[UploadRecord] {
        &self.uploads
    }

    /// The data currently "resident", if anything was uploaded.
    pub fn last_upload(&self) -> Option<&UploadRecord> {
        self.uploads.last()
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl RenderBase for DummyRenderBase {
    fn register_attrib_locations(
        &mut self,
        mesh: &CpuMesh,
        locations: &AttribLocations,
    ) -> RenderResult<()> {
        log::trace!(
            "DummyRenderBase: uploading {:?} ({} vertices, {} indices, {} + {} bytes)",
            mesh.label(),
            mesh.vertex_count(),
            mesh.index_count(),
            mesh.vertex_bytes().len(),
            mesh.index_bytes().len()
        );
        self.uploads.push(UploadRecord {
            mesh: mesh.clone(),
            locations: *locations,
        });
        Ok(())
    }

    fn render_indexed(
        &mut self,
        topology: PrimitiveTopology,
        range: DrawRange,
    ) -> RenderResult<()> {
        let upload = self
            .uploads
            .last()
            .ok_or_else(|| RenderError::Backend("no index buffer uploaded".to_string()))?;
        let end = range
            .first
            .checked_add(range.count)
            .filter(|&end| end <= upload.mesh.index_count())
            .ok_or_else(|| {
                RenderError::Backend(format!(
                    "draw range of {} elements at {} exceeds {} uploaded indices",
                    range.count,
                    range.first,
                    upload.mesh.index_count()
                ))
            })?;
        log::trace!(
            "DummyRenderBase: draw {:?} elements {}..{}",
            topology,
            range.first,
            end
        );
        self.draws.push(DrawCall { topology, range });
        Ok(())
    }
}
