//! Cone mesh generator.
//!
//! The cone has height 1 and a base of radius 1. It is centered on the y
//! axis: the center of the base is at the origin and the apex at `(0, 1, 0)`.
//!
//! The mesh is made of two parts that share one vertex buffer and one index
//! buffer, base ("disk") first and side second:
//!
//! - The disk is a center vertex plus `rings` concentric rings of `slices`
//!   vertices each, all facing down.
//! - The side is a column of `stacks` vertices per slice running from the
//!   base towards the apex, followed by an apex vertex for that slice. When
//!   texture coordinates are written, one more column is added so the texture
//!   seam at slice 0 gets its own vertices (`s = 1` instead of `s = 0`).
//!
//! Slice angles are measured counterclockwise (seen from above) starting at
//! the negative z axis.
//!
//! Use the count queries to size buffers before calling [`ConeMesh::fill`],
//! or let [`ConeMesh::generate`] allocate them.

use std::f32::consts::{PI, SQRT_2, TAU};
use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::error::{MeshError, MeshResult};

use super::data::{CpuMesh, DrawRange};
use super::layout::{VertexAttributeSemantic, VertexLayout};

/// Name of the base (disk) draw range attached to generated meshes.
pub const BASE_RANGE: &str = "base";
/// Name of the side draw range attached to generated meshes.
pub const SIDE_RANGE: &str = "side";

/// Tessellation of a cone.
///
/// Values are always kept inside their valid ranges; out of range input is
/// clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConeResolution {
    slices: u32,
    stacks: u32,
    rings: u32,
}

impl ConeResolution {
    pub const MIN_SLICES: u32 = 3;
    pub const MIN_STACKS: u32 = 1;
    pub const MIN_RINGS: u32 = 1;
    /// Upper bound shared by all three values.
    pub const MAX: u32 = 255;

    /// Create a resolution, clamping each value into its range.
    pub fn new(slices: i32, stacks: i32, rings: i32) -> Self {
        Self {
            slices: clamp(slices, Self::MIN_SLICES),
            stacks: clamp(stacks, Self::MIN_STACKS),
            rings: clamp(rings, Self::MIN_RINGS),
        }
    }

    /// Number of angular divisions around the axis.
    pub fn slices(&self) -> u32 {
        self.slices
    }

    /// Number of divisions of the side from base to apex.
    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    /// Number of concentric rings on the base.
    pub fn rings(&self) -> u32 {
        self.rings
    }
}

impl Default for ConeResolution {
    fn default() -> Self {
        Self {
            slices: Self::MIN_SLICES,
            stacks: Self::MIN_STACKS,
            rings: Self::MIN_RINGS,
        }
    }
}

fn clamp(value: i32, min: u32) -> u32 {
    value.clamp(min as i32, ConeResolution::MAX as i32) as u32
}

/// Whether the data last handed to the render base matches the current
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadState {
    /// Buffers must be regenerated and uploaded before rendering.
    #[default]
    Stale,
    /// The uploaded buffers match the current resolution.
    Loaded,
}

/// Element and vertex counts for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConeCounts {
    pub disk_elements: usize,
    pub disk_vertices: usize,
    pub side_elements: usize,
    pub side_vertices_tex_coords: usize,
    pub side_vertices_no_tex_coords: usize,
}

impl ConeCounts {
    pub fn elements(&self) -> usize {
        self.disk_elements + self.side_elements
    }

    pub fn vertices(&self, tex_coords: bool) -> usize {
        if tex_coords {
            self.disk_vertices + self.side_vertices_tex_coords
        } else {
            self.disk_vertices + self.side_vertices_no_tex_coords
        }
    }
}

/// Generates vertex and index data for a cone.
///
/// Holds only the resolution and the [`LoadState`] of the data derived from
/// it. Not internally synchronized; mutation requires `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConeMesh {
    resolution: ConeResolution,
    load_state: LoadState,
}

impl ConeMesh {
    pub fn new(slices: i32, stacks: i32, rings: i32) -> Self {
        Self::from_resolution(ConeResolution::new(slices, stacks, rings))
    }

    pub fn from_resolution(resolution: ConeResolution) -> Self {
        Self {
            resolution,
            load_state: LoadState::Stale,
        }
    }

    /// Change the resolution.
    ///
    /// Values are clamped first. If the clamped resolution equals the current
    /// one nothing happens; otherwise the load state becomes
    /// [`LoadState::Stale`]. Returns whether the resolution changed.
    pub fn set_resolution(&mut self, slices: i32, stacks: i32, rings: i32) -> bool {
        let resolution = ConeResolution::new(slices, stacks, rings);
        if resolution == self.resolution {
            return false;
        }
        log::debug!(
            "cone remeshed: {}x{}x{} -> {}x{}x{}",
            self.resolution.slices,
            self.resolution.stacks,
            self.resolution.rings,
            resolution.slices,
            resolution.stacks,
            resolution.rings
        );
        self.resolution = resolution;
        self.load_state = LoadState::Stale;
        true
    }

    pub fn resolution(&self) -> ConeResolution {
        self.resolution
    }

    pub fn slices(&self) -> u32 {
        self.resolution.slices
    }

    pub fn stacks(&self) -> u32 {
        self.resolution.stacks
    }

    pub fn rings(&self) -> u32 {
        self.resolution.rings
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    /// Record that the render base holds data for the current resolution.
    pub fn mark_loaded(&mut self) {
        self.load_state = LoadState::Loaded;
    }

    // ------------------------------------------------------------------
    // Counts
    // ------------------------------------------------------------------

    pub fn disk_element_count(&self) -> usize {
        3 * (2 * self.rings() as usize - 1) * self.slices() as usize
    }

    pub fn disk_vertex_count(&self) -> usize {
        1 + (self.rings() * self.slices()) as usize
    }

    pub fn side_element_count(&self) -> usize {
        3 * (2 * self.stacks() as usize - 1) * self.slices() as usize
    }

    pub fn side_vertex_count_tex_coords(&self) -> usize {
        (self.slices() + self.stacks() * (self.slices() + 1)) as usize
    }

    pub fn side_vertex_count_no_tex_coords(&self) -> usize {
        (self.slices() + self.stacks() * self.slices()) as usize
    }

    pub fn side_vertex_count(&self, tex_coords: bool) -> usize {
        if tex_coords {
            self.side_vertex_count_tex_coords()
        } else {
            self.side_vertex_count_no_tex_coords()
        }
    }

    pub fn element_count(&self) -> usize {
        self.disk_element_count() + self.side_element_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.element_count() / 3
    }

    pub fn vertex_count_tex_coords(&self) -> usize {
        self.disk_vertex_count() + self.side_vertex_count_tex_coords()
    }

    pub fn vertex_count_no_tex_coords(&self) -> usize {
        self.disk_vertex_count() + self.side_vertex_count_no_tex_coords()
    }

    pub fn vertex_count(&self, tex_coords: bool) -> usize {
        self.disk_vertex_count() + self.side_vertex_count(tex_coords)
    }

    /// Number of `f32`s [`fill`](Self::fill) needs for `layout`.
    pub fn vertex_float_count(&self, layout: &VertexLayout) -> usize {
        self.vertex_count(layout.has_tex_coords()) * layout.stride_floats()
    }

    pub fn counts(&self) -> ConeCounts {
        ConeCounts {
            disk_elements: self.disk_element_count(),
            disk_vertices: self.disk_vertex_count(),
            side_elements: self.side_element_count(),
            side_vertices_tex_coords: self.side_vertex_count_tex_coords(),
            side_vertices_no_tex_coords: self.side_vertex_count_no_tex_coords(),
        }
    }

    /// Index range of the base.
    pub fn disk_range(&self) -> DrawRange {
        DrawRange::new(0, self.disk_element_count() as u32)
    }

    /// Index range of the side. Always follows the base.
    pub fn side_range(&self) -> DrawRange {
        DrawRange::new(
            self.disk_element_count() as u32,
            self.side_element_count() as u32,
        )
    }

    pub fn full_range(&self) -> DrawRange {
        DrawRange::new(0, self.element_count() as u32)
    }

    // ------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------

    /// Write the cone into caller-provided buffers.
    ///
    /// `vertices` must hold at least [`vertex_float_count`](Self::vertex_float_count)
    /// floats and `indices` at least [`element_count`](Self::element_count)
    /// indices. Buffers are checked before anything is written; data past the
    /// required length, and any part of a vertex record not covered by the
    /// layout, is left untouched.
    pub fn fill(
        &self,
        vertices: &mut [f32],
        indices: &mut [u32],
        layout: &VertexLayout,
    ) -> MeshResult<()> {
        layout.validate()?;

        let tex_coords = layout.has_tex_coords();
        let required_floats = self.vertex_float_count(layout);
        if vertices.len() < required_floats {
            return Err(MeshError::VertexBufferTooSmall {
                required: required_floats,
                actual: vertices.len(),
            });
        }
        let required_indices = self.element_count();
        if indices.len() < required_indices {
            return Err(MeshError::IndexBufferTooSmall {
                required: required_indices,
                actual: indices.len(),
            });
        }

        log::trace!(
            "filling cone {}x{}x{}: {} vertices, {} elements (layout {:?})",
            self.slices(),
            self.stacks(),
            self.rings(),
            self.vertex_count(tex_coords),
            required_indices,
            layout.label
        );

        let mut writer = VertexWriter::new(&mut vertices[..required_floats], layout);
        self.write_disk_vertices(&mut writer);
        self.write_side_vertices(&mut writer, tex_coords);

        let mut triangles = TriangleWriter::new(&mut indices[..required_indices]);
        self.write_disk_indices(&mut triangles);
        self.write_side_indices(&mut triangles, tex_coords);
        debug_assert_eq!(triangles.written(), required_indices);

        Ok(())
    }

    /// Allocate exactly-sized buffers, fill them, and wrap them in a
    /// [`CpuMesh`] carrying the [`BASE_RANGE`] and [`SIDE_RANGE`] draw ranges.
    pub fn generate(&self, layout: Arc<VertexLayout>) -> MeshResult<CpuMesh> {
        layout.validate()?;
        let mut vertices = vec![0.0; self.vertex_float_count(&layout)];
        let mut indices = vec![0; self.element_count()];
        self.fill(&mut vertices, &mut indices, &layout)?;

        Ok(CpuMesh::new(layout)
            .with_vertices(vertices)
            .with_indices(indices)
            .with_range(BASE_RANGE, self.disk_range())
            .with_range(SIDE_RANGE, self.side_range())
            .with_label("cone"))
    }

    /// `(-sin θ, -cos θ)` for slice `i`, wrapping at `slices`.
    fn slice_direction(&self, i: u32) -> (f32, f32) {
        let theta = (i % self.slices()) as f32 * TAU / self.slices() as f32;
        (-theta.sin(), -theta.cos())
    }

    fn disk_vertex_index(&self, slice: u32, ring: u32) -> usize {
        (slice * self.rings() + ring) as usize
    }

    /// First vertex of the side column for `slice`.
    fn side_column_start(&self, slice: u32) -> usize {
        self.disk_vertex_count() + (slice * (self.stacks() + 1)) as usize
    }

    fn write_disk_vertices(&self, writer: &mut VertexWriter<'_>) {
        writer.set_base_vertex(0, 0.0, 0.0);
        let rings = self.rings();
        for i in 0..self.slices() {
            let (s, c) = self.slice_direction(i);
            for j in 1..=rings {
                let radius = j as f32 / rings as f32;
                writer.set_base_vertex(self.disk_vertex_index(i, j), s * radius, c * radius);
            }
        }
    }

    fn write_side_vertices(&self, writer: &mut VertexWriter<'_>, tex_coords: bool) {
        let slices = self.slices();
        let stacks = self.stacks();
        // The seam column only exists when texture coordinates are written.
        let columns = if tex_coords { slices + 1 } else { slices };

        for i in 0..columns {
            let (s, c) = self.slice_direction(i);
            let start = self.side_column_start(i);
            let s_coord = i as f32 / slices as f32;

            for j in 0..stacks {
                let vertex = start + j as usize;
                let t_coord = j as f32 / stacks as f32;
                let slope_factor = 1.0 - t_coord;
                writer.set_position(
                    vertex,
                    Vec3::new(s * slope_factor, t_coord, c * slope_factor),
                );
                if writer.has_normals() {
                    writer.set_normal(vertex, slant_normal(s, c));
                }
                writer.set_tex_coord(vertex, Vec2::new(s_coord, t_coord));
            }

            if i < slices {
                let apex = start + stacks as usize;
                writer.set_position(apex, Vec3::Y);
                if writer.has_normals() {
                    // Midway between the two columns meeting at this apex.
                    let theta = (2 * i + 1) as f32 * PI / slices as f32;
                    writer.set_normal(apex, slant_normal(-theta.sin(), -theta.cos()));
                }
                // Top center of the texture for every apex.
                writer.set_tex_coord(apex, Vec2::new(0.5, 1.0));
            }
        }
    }

    fn write_disk_indices(&self, out: &mut TriangleWriter<'_>) {
        let slices = self.slices();
        let rings = self.rings();
        for i in 0..slices {
            let r = i * rings + 1;
            let right = ((i + 1) % slices) * rings + 1;
            out.push(0, right, r);
            for j in 0..rings - 1 {
                out.push(r + j, right + j, right + j + 1);
                out.push(r + j, right + j + 1, r + j + 1);
            }
        }
    }

    fn write_side_indices(&self, out: &mut TriangleWriter<'_>, tex_coords: bool) {
        let slices = self.slices();
        let stacks = self.stacks();
        for i in 0..slices {
            let r = self.side_column_start(i) as u32;
            let next = if tex_coords { i + 1 } else { (i + 1) % slices };
            let right = self.side_column_start(next) as u32;
            for j in 0..stacks - 1 {
                out.push(right + j, r + j + 1, r + j);
                out.push(right + j, right + j + 1, r + j + 1);
            }
            // r + stacks is this column's apex.
            let j = stacks - 1;
            out.push(right + j, r + j + 1, r + j);
        }
    }
}

/// Side normal for a slice direction `(s, c)`.
///
/// This is the fixed 45 degree slant vector scaled by sqrt(2), not a unit
/// surface normal. Shaders are expected to normalize.
fn slant_normal(s: f32, c: f32) -> Vec3 {
    Vec3::new(s * SQRT_2, SQRT_2, c * SQRT_2)
}

/// Writes attributes into interleaved vertex records.
struct VertexWriter<'a> {
    data: &'a mut [f32],
    stride: usize,
    position: usize,
    normal: Option<usize>,
    tex_coord: Option<usize>,
}

impl<'a> VertexWriter<'a> {
    /// `layout` must already be validated.
    fn new(data: &'a mut [f32], layout: &VertexLayout) -> Self {
        Self {
            data,
            stride: layout.stride_floats(),
            position: layout
                .float_offset(VertexAttributeSemantic::Position)
                .unwrap_or(0),
            normal: layout.float_offset(VertexAttributeSemantic::Normal),
            tex_coord: layout.float_offset(VertexAttributeSemantic::TexCoord0),
        }
    }

    fn has_normals(&self) -> bool {
        self.normal.is_some()
    }

    fn write(&mut self, vertex: usize, offset: usize, values: &[f32]) {
        let at = vertex * self.stride + offset;
        self.data[at..at + values.len()].copy_from_slice(values);
    }

    fn set_position(&mut self, vertex: usize, position: Vec3) {
        self.write(vertex, self.position, &position.to_array());
    }

    fn set_normal(&mut self, vertex: usize, normal: Vec3) {
        if let Some(offset) = self.normal {
            self.write(vertex, offset, &normal.to_array());
        }
    }

    fn set_tex_coord(&mut self, vertex: usize, tex_coord: Vec2) {
        if let Some(offset) = self.tex_coord {
            self.write(vertex, offset, &tex_coord.to_array());
        }
    }

    /// A vertex of the base at `(x, 0, z)`. The texture maps the unit disk
    /// onto `[0, 1]^2`.
    fn set_base_vertex(&mut self, vertex: usize, x: f32, z: f32) {
        self.set_position(vertex, Vec3::new(x, 0.0, z));
        self.set_normal(vertex, Vec3::NEG_Y);
        self.set_tex_coord(vertex, Vec2::new(0.5 * (1.0 - x), 0.5 * (1.0 - z)));
    }
}

/// Appends triangles to an index buffer.
struct TriangleWriter<'a> {
    data: &'a mut [u32],
    cursor: usize,
}

impl<'a> TriangleWriter<'a> {
    fn new(data: &'a mut [u32]) -> Self {
        Self { data, cursor: 0 }
    }

    fn push(&mut self, a: u32, b: u32, c: u32) {
        self.data[self.cursor..self.cursor + 3].copy_from_slice(&[a, b, c]);
        self.cursor += 3;
    }

    fn written(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::VertexAttribute;

    fn position(vertices: &[f32], layout: &VertexLayout, vertex: usize) -> Vec3 {
        let at = vertex * layout.stride_floats()
            + layout
                .float_offset(VertexAttributeSemantic::Position)
                .unwrap();
        Vec3::from_slice(&vertices[at..at + 3])
    }

    fn tex_coord(vertices: &[f32], layout: &VertexLayout, vertex: usize) -> Vec2 {
        let at = vertex * layout.stride_floats()
            + layout
                .float_offset(VertexAttributeSemantic::TexCoord0)
                .unwrap();
        Vec2::from_slice(&vertices[at..at + 2])
    }

    #[test]
    fn test_resolution_clamping() {
        let resolution = ConeResolution::new(-4, 0, 1000);
        assert_eq!(resolution.slices(), 3);
        assert_eq!(resolution.stacks(), 1);
        assert_eq!(resolution.rings(), 255);

        let resolution = ConeResolution::new(256, 300, i32::MIN);
        assert_eq!(resolution.slices(), 255);
        assert_eq!(resolution.stacks(), 255);
        assert_eq!(resolution.rings(), 1);

        assert_eq!(ConeResolution::default(), ConeResolution::new(3, 1, 1));
    }

    #[test]
    fn test_set_resolution_marks_stale() {
        let mut mesh = ConeMesh::new(8, 2, 2);
        assert_eq!(mesh.load_state(), LoadState::Stale);
        mesh.mark_loaded();
        assert!(mesh.is_loaded());

        assert!(!mesh.set_resolution(8, 2, 2));
        assert!(mesh.is_loaded());

        assert!(mesh.set_resolution(9, 2, 2));
        assert_eq!(mesh.load_state(), LoadState::Stale);
        assert_eq!(mesh.slices(), 9);
    }

    #[test]
    fn test_set_resolution_compares_clamped_values() {
        let mut mesh = ConeMesh::new(1000, 1, 1);
        mesh.mark_loaded();
        assert!(!mesh.set_resolution(255, 0, -3));
        assert!(!mesh.set_resolution(999, 1, 1));
        assert!(mesh.is_loaded());
    }

    #[test]
    fn test_counts_minimal_cone() {
        let mesh = ConeMesh::new(3, 1, 1);
        assert_eq!(mesh.disk_vertex_count(), 4);
        assert_eq!(mesh.disk_element_count(), 9);
        assert_eq!(mesh.side_vertex_count_no_tex_coords(), 6);
        assert_eq!(mesh.side_vertex_count_tex_coords(), 7);
        assert_eq!(mesh.side_element_count(), 9);
        assert_eq!(mesh.element_count(), 18);
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.vertex_count_no_tex_coords(), 10);
        assert_eq!(mesh.vertex_count_tex_coords(), 11);
    }

    #[test]
    fn test_counts_summary() {
        let mesh = ConeMesh::new(4, 2, 3);
        let counts = mesh.counts();
        assert_eq!(counts.disk_elements, 3 * 4 * 5);
        assert_eq!(counts.disk_vertices, 13);
        assert_eq!(counts.side_elements, 3 * 4 * 3);
        assert_eq!(counts.side_vertices_tex_coords, 14);
        assert_eq!(counts.side_vertices_no_tex_coords, 12);
        assert_eq!(counts.elements(), mesh.element_count());
        assert_eq!(counts.vertices(true), mesh.vertex_count_tex_coords());
        assert_eq!(counts.vertices(false), mesh.vertex_count_no_tex_coords());
    }

    #[test]
    fn test_draw_ranges() {
        let mesh = ConeMesh::new(5, 3, 2);
        assert_eq!(mesh.disk_range(), DrawRange::new(0, 45));
        assert_eq!(mesh.side_range(), DrawRange::new(45, 75));
        assert_eq!(mesh.full_range(), DrawRange::new(0, 120));
    }

    #[test]
    fn test_minimal_cone_indices() {
        let mesh = ConeMesh::new(3, 1, 1);
        let layout = VertexLayout::position_only();
        let mut vertices = vec![0.0; mesh.vertex_float_count(&layout)];
        let mut indices = vec![0; mesh.element_count()];
        mesh.fill(&mut vertices, &mut indices, &layout).unwrap();

        #[rustfmt::skip]
        let expected: [u32; 18] = [
            // base fans
            0, 2, 1,  0, 3, 2,  0, 1, 3,
            // side, the last slice wraps to the first column
            6, 5, 4,  8, 7, 6,  4, 9, 8,
        ];
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_minimal_cone_indices_with_seam() {
        let mesh = ConeMesh::new(3, 1, 1);
        let layout = VertexLayout::position_uv();
        let mut vertices = vec![0.0; mesh.vertex_float_count(&layout)];
        let mut indices = vec![0; mesh.element_count()];
        mesh.fill(&mut vertices, &mut indices, &layout).unwrap();

        // The last slice uses the seam column starting at vertex 10.
        assert_eq!(&indices[9..], &[6, 5, 4, 8, 7, 6, 10, 9, 8]);
    }

    #[test]
    fn test_base_vertices() {
        let mesh = ConeMesh::new(4, 1, 2);
        let layout = VertexLayout::position_normal_uv();
        let cpu = mesh.generate(layout.clone()).unwrap();
        let vertices = cpu.vertices();

        assert_eq!(position(vertices, &layout, 0), Vec3::ZERO);
        assert_eq!(tex_coord(vertices, &layout, 0), Vec2::new(0.5, 0.5));

        // Slice 0, outer ring points down the negative z axis.
        let p = position(vertices, &layout, 2);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
        assert!(tex_coord(vertices, &layout, 2).abs_diff_eq(Vec2::new(0.5, 1.0), 1e-6));

        // Slice 1 (90 degrees counterclockwise from above), inner ring.
        let p = position(vertices, &layout, 3);
        assert!(p.abs_diff_eq(Vec3::new(-0.5, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_side_normals_are_scaled_slant_vectors() {
        let mesh = ConeMesh::new(4, 1, 1);
        let layout = VertexLayout::position_normal();
        let cpu = mesh.generate(layout.clone()).unwrap();
        let stride = layout.stride_floats();
        let base = mesh.disk_vertex_count();

        // Slice 0 bottom vertex.
        let n = Vec3::from_slice(&cpu.vertices()[base * stride + 3..base * stride + 6]);
        assert!(n.abs_diff_eq(Vec3::new(0.0, SQRT_2, -SQRT_2), 1e-6));

        // Slice 0 apex sits midway towards slice 1 (45 degrees).
        let apex = base + 1;
        let n = Vec3::from_slice(&cpu.vertices()[apex * stride + 3..apex * stride + 6]);
        assert!(n.abs_diff_eq(Vec3::new(-1.0, SQRT_2, -1.0), 1e-5));
    }

    #[test]
    fn test_fill_rejects_undersized_buffers() {
        let mesh = ConeMesh::new(3, 1, 1);
        let layout = VertexLayout::position_normal_uv();
        let mut vertices = vec![0.0; mesh.vertex_float_count(&layout) - 1];
        let mut indices = vec![0; mesh.element_count()];
        assert_eq!(
            mesh.fill(&mut vertices, &mut indices, &layout),
            Err(MeshError::VertexBufferTooSmall {
                required: 88,
                actual: 87
            })
        );
        assert!(vertices.iter().all(|&v| v == 0.0));

        let mut vertices = vec![0.0; 88];
        let mut indices = vec![0; 17];
        assert_eq!(
            mesh.fill(&mut vertices, &mut indices, &layout),
            Err(MeshError::IndexBufferTooSmall {
                required: 18,
                actual: 17
            })
        );
    }

    #[test]
    fn test_fill_rejects_invalid_layout() {
        let mesh = ConeMesh::default();
        let layout = VertexLayout::new(0);
        let mut vertices = vec![0.0; 64];
        let mut indices = vec![0; 64];
        assert_eq!(
            mesh.fill(&mut vertices, &mut indices, &layout),
            Err(MeshError::InvalidStride(0))
        );

        let layout = VertexLayout::new(24)
            .with_attribute(VertexAttribute::position(0))
            .with_attribute(VertexAttribute::normal(4));
        assert!(matches!(
            mesh.fill(&mut vertices, &mut indices, &layout),
            Err(MeshError::OverlappingAttributes { .. })
        ));
        assert!(vertices.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_generate_attaches_ranges() {
        let mesh = ConeMesh::new(6, 2, 2);
        let cpu = mesh.generate(VertexLayout::position_normal_uv()).unwrap();
        assert_eq!(cpu.vertex_count() as usize, mesh.vertex_count_tex_coords());
        assert_eq!(cpu.index_count() as usize, mesh.element_count());
        assert_eq!(cpu.range(BASE_RANGE), Some(mesh.disk_range()));
        assert_eq!(cpu.range(SIDE_RANGE), Some(mesh.side_range()));
        assert_eq!(cpu.label(), Some("cone"));
    }
}
