//! Conversion of sliced surfaces into indexed, upload-ready vertex buffers.

use std::collections::HashMap;

use glam::{Vec2, Vec3, Vec4};
use mesh_slicer_core::Corner;

use crate::sliced_mesh::SlicedSurface;

/// Builds a renderable form from the surfaces of one half of a sliced mesh.
///
/// This is the outbound seam to the host: implementations decide what a renderable
/// mesh is. Materials are handed through untouched.
pub trait MeshAssembler<M> {
    /// The renderable representation of one half.
    type Output;

    /// Assembles the surfaces of one half.
    fn assemble(&self, surfaces: &[SlicedSurface<M>]) -> Self::Output;
}

/// GPU-compatible interleaved vertex.
///
/// Attributes missing on the source corner are filled in: the face normal for
/// normals, zero for UVs and tangents, opaque white for colors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Shading normal.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
    /// Tangent with handedness in `w`.
    pub tangent: [f32; 4],
    /// Vertex color.
    pub color: [f32; 4],
}

impl RenderVertex {
    fn from_corner(corner: &Corner, face_normal: Vec3) -> Self {
        Self {
            position: corner.position.to_array(),
            normal: corner.normal.unwrap_or(face_normal).to_array(),
            uv: corner.uv.unwrap_or(Vec2::ZERO).to_array(),
            tangent: corner.tangent.unwrap_or(Vec4::ZERO).to_array(),
            color: corner.color.unwrap_or(Vec4::ONE).to_array(),
        }
    }

    /// Bit pattern of the vertex, used to weld exact duplicates.
    fn key(&self) -> [u32; 16] {
        bytemuck::cast(*self)
    }
}

/// An indexed triangle surface ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedSurface<M> {
    /// Interleaved vertices.
    pub vertices: Vec<RenderVertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
    /// Material of the surface.
    pub material: Option<M>,
}

impl<M> IndexedSurface<M> {
    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the vertex buffer as raw bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// One half of a sliced mesh as indexed surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh<M> {
    /// Surfaces in the order of the sliced mesh.
    pub surfaces: Vec<IndexedSurface<M>>,
}

impl<M> IndexedMesh<M> {
    /// Returns the total number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.surfaces.iter().map(IndexedSurface::num_triangles).sum()
    }
}

/// Default assembler producing [`IndexedMesh`]es.
#[derive(Debug, Clone, Copy)]
pub struct IndexedMeshAssembler {
    /// Whether bit-identical vertices share one index.
    pub weld_vertices: bool,
}

impl Default for IndexedMeshAssembler {
    fn default() -> Self {
        Self {
            weld_vertices: true,
        }
    }
}

impl IndexedMeshAssembler {
    /// Creates an assembler.
    pub fn new(weld_vertices: bool) -> Self {
        Self { weld_vertices }
    }

    fn assemble_surface<M: Clone>(&self, surface: &SlicedSurface<M>) -> IndexedSurface<M> {
        let mut vertices = Vec::with_capacity(surface.faces.len() * 3);
        let mut indices = Vec::with_capacity(surface.faces.len() * 3);
        let mut welded: HashMap<[u32; 16], u32> = HashMap::new();

        for face in &surface.faces {
            let face_normal = face.normal();
            for corner in &face.corners {
                let vertex = RenderVertex::from_corner(corner, face_normal);
                let next = vertices.len() as u32;
                let index = if self.weld_vertices {
                    *welded.entry(vertex.key()).or_insert(next)
                } else {
                    next
                };
                if index == next {
                    vertices.push(vertex);
                }
                indices.push(index);
            }
        }

        IndexedSurface {
            vertices,
            indices,
            material: surface.material.clone(),
        }
    }
}

impl<M: Clone> MeshAssembler<M> for IndexedMeshAssembler {
    type Output = IndexedMesh<M>;

    fn assemble(&self, surfaces: &[SlicedSurface<M>]) -> IndexedMesh<M> {
        IndexedMesh {
            surfaces: surfaces
                .iter()
                .map(|surface| self.assemble_surface(surface))
                .collect(),
        }
    }
}
