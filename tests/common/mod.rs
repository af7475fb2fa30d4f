//! Shared helpers for the cone integration tests.

#![allow(dead_code)]

use cone_mesh::mesh::{ConeMesh, VertexAttributeSemantic, VertexLayout};
use glam::{Vec2, Vec3};

/// Guard value for vertex memory the generator must not touch.
pub const FLOAT_CANARY: f32 = -12345.5;
/// Guard value for index memory the generator must not touch.
pub const INDEX_CANARY: u32 = 0xDEAD_BEEF;
/// Extra guard entries placed after each buffer.
pub const GUARD: usize = 16;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Buffers filled by [`fill_guarded`], including the trailing guard region.
pub struct Filled {
    pub layout: VertexLayout,
    pub vertex_count: usize,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl Filled {
    fn read(&self, vertex: usize, semantic: VertexAttributeSemantic, len: usize) -> &[f32] {
        let offset = self
            .layout
            .float_offset(semantic)
            .unwrap_or_else(|| panic!("layout has no {semantic:?}"));
        let at = vertex * self.layout.stride_floats() + offset;
        &self.vertices[at..at + len]
    }

    pub fn position(&self, vertex: usize) -> Vec3 {
        Vec3::from_slice(self.read(vertex, VertexAttributeSemantic::Position, 3))
    }

    pub fn normal(&self, vertex: usize) -> Vec3 {
        Vec3::from_slice(self.read(vertex, VertexAttributeSemantic::Normal, 3))
    }

    pub fn tex_coord(&self, vertex: usize) -> Vec2 {
        Vec2::from_slice(self.read(vertex, VertexAttributeSemantic::TexCoord0, 2))
    }

    /// Index data without the guard region.
    pub fn elements(&self) -> &[u32] {
        &self.indices[..self.indices.len() - GUARD]
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.elements().chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Geometric normal of a triangle from its winding.
    pub fn face_normal(&self, triangle: [u32; 3]) -> Vec3 {
        let a = self.position(triangle[0] as usize);
        let b = self.position(triangle[1] as usize);
        let c = self.position(triangle[2] as usize);
        (b - a).cross(c - a)
    }

    pub fn centroid(&self, triangle: [u32; 3]) -> Vec3 {
        let [a, b, c] = triangle.map(|i| self.position(i as usize));
        (a + b + c) / 3.0
    }
}

/// Fill exactly-sized buffers followed by guard entries, all pre-set to the
/// canary values, and check the guards survived.
pub fn fill_guarded(mesh: &ConeMesh, layout: &VertexLayout) -> Filled {
    let vertex_count = mesh.vertex_count(layout.has_tex_coords());
    let float_count = mesh.vertex_float_count(layout);
    assert_eq!(float_count, vertex_count * layout.stride_floats());

    let mut vertices = vec![FLOAT_CANARY; float_count + GUARD];
    let mut indices = vec![INDEX_CANARY; mesh.element_count() + GUARD];
    mesh.fill(&mut vertices, &mut indices, layout)
        .expect("fill should succeed with exactly sized buffers");

    assert!(
        vertices[float_count..].iter().all(|&v| v == FLOAT_CANARY),
        "vertex data written past the counted size"
    );
    assert!(
        indices[mesh.element_count()..]
            .iter()
            .all(|&i| i == INDEX_CANARY),
        "index data written past the counted size"
    );

    Filled {
        layout: layout.clone(),
        vertex_count,
        vertices,
        indices,
    }
}
