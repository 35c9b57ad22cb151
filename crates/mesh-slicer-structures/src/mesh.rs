//! Host mesh contract and an owned array-backed mesh.
//!
//! The slicer only reads meshes through [`MeshSource`]: a list of surfaces, each a
//! set of vertex attribute arrays plus an opaque material handle.

use std::fmt;

use glam::{Vec2, Vec3, Vec4};

/// How the vertices (or indices) of a surface are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveType {
    /// Every three vertices form a triangle.
    #[default]
    Triangles,
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
    /// Every two vertices form a line segment.
    Lines,
    /// Every vertex is a point.
    Points,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Triangles => "triangles",
            Self::TriangleStrip => "triangle strip",
            Self::Lines => "lines",
            Self::Points => "points",
        };
        f.write_str(name)
    }
}

/// Borrowed view of the vertex data of one surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceArrays<'a> {
    /// Primitive assembly mode.
    pub primitive: PrimitiveType,
    /// Vertex positions.
    pub positions: &'a [Vec3],
    /// Per-vertex normals.
    pub normals: Option<&'a [Vec3]>,
    /// Per-vertex texture coordinates.
    pub uvs: Option<&'a [Vec2]>,
    /// Per-vertex tangents, handedness in `w`.
    pub tangents: Option<&'a [Vec4]>,
    /// Per-vertex colors.
    pub colors: Option<&'a [Vec4]>,
    /// Optional index buffer.
    pub indices: Option<&'a [u32]>,
}

/// Read-only access to a mesh made of surfaces.
///
/// Materials are opaque to the slicer: they are cloned from the source surfaces
/// into the sliced result and never inspected.
pub trait MeshSource {
    /// Material handle attached to each surface.
    type Material: Clone;

    /// Returns the number of surfaces.
    fn surface_count(&self) -> usize;

    /// Returns the vertex data of a surface, or `None` if it has no primitive data.
    fn surface_arrays(&self, surface: usize) -> Option<SurfaceArrays<'_>>;

    /// Returns the material of a surface, if any.
    fn surface_material(&self, surface: usize) -> Option<Self::Material>;

    /// Returns the largest distance of a vertex from the origin.
    fn extent(&self) -> f32 {
        (0..self.surface_count())
            .filter_map(|surface| self.surface_arrays(surface))
            .flat_map(|arrays| arrays.positions.iter())
            .map(|p| p.length())
            .fold(0.0, f32::max)
    }
}

/// An owned surface made of attribute arrays.
#[derive(Debug, Clone, Default)]
pub struct ArraySurface<M> {
    primitive: PrimitiveType,
    positions: Vec<Vec3>,
    normals: Option<Vec<Vec3>>,
    uvs: Option<Vec<Vec2>>,
    tangents: Option<Vec<Vec4>>,
    colors: Option<Vec<Vec4>>,
    indices: Option<Vec<u32>>,
    material: Option<M>,
}

impl<M> ArraySurface<M> {
    /// Creates a non-indexed triangle surface from positions.
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            primitive: PrimitiveType::Triangles,
            positions,
            normals: None,
            uvs: None,
            tangents: None,
            colors: None,
            indices: None,
            material: None,
        }
    }

    /// Creates an indexed triangle surface.
    pub fn from_triangles(positions: Vec<Vec3>, triangles: &[[u32; 3]]) -> Self {
        Self::new(positions).with_indices(triangles.iter().flatten().copied().collect())
    }

    /// Sets the primitive type.
    #[must_use]
    pub fn with_primitive(mut self, primitive: PrimitiveType) -> Self {
        self.primitive = primitive;
        self
    }

    /// Sets the index buffer.
    #[must_use]
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Sets per-vertex normals.
    #[must_use]
    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Sets per-vertex texture coordinates.
    #[must_use]
    pub fn with_uvs(mut self, uvs: Vec<Vec2>) -> Self {
        self.uvs = Some(uvs);
        self
    }

    /// Sets per-vertex tangents.
    #[must_use]
    pub fn with_tangents(mut self, tangents: Vec<Vec4>) -> Self {
        self.tangents = Some(tangents);
        self
    }

    /// Sets per-vertex colors.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Vec4>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: M) -> Self {
        self.material = Some(material);
        self
    }

    /// Returns the vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Returns the material, if any.
    pub fn material(&self) -> Option<&M> {
        self.material.as_ref()
    }

    /// Returns a borrowed view of the surface arrays.
    pub fn arrays(&self) -> SurfaceArrays<'_> {
        SurfaceArrays {
            primitive: self.primitive,
            positions: &self.positions,
            normals: self.normals.as_deref(),
            uvs: self.uvs.as_deref(),
            tangents: self.tangents.as_deref(),
            colors: self.colors.as_deref(),
            indices: self.indices.as_deref(),
        }
    }
}

/// A mesh owning its surfaces as attribute arrays.
#[derive(Debug, Clone)]
pub struct ArrayMesh<M> {
    surfaces: Vec<ArraySurface<M>>,
}

impl<M> Default for ArrayMesh<M> {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }
}

impl<M> ArrayMesh<M> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from surfaces.
    pub fn from_surfaces(surfaces: Vec<ArraySurface<M>>) -> Self {
        Self { surfaces }
    }

    /// Appends a surface.
    pub fn add_surface(&mut self, surface: ArraySurface<M>) {
        self.surfaces.push(surface);
    }

    /// Returns the surfaces.
    pub fn surfaces(&self) -> &[ArraySurface<M>] {
        &self.surfaces
    }

    /// Creates an axis-aligned cube centered at the origin as a single surface.
    ///
    /// Each side has its own four vertices with flat normals, UVs and tangents;
    /// triangles wind counter-clockwise seen from outside.
    pub fn cube(size: f32, material: Option<M>) -> Self {
        // (normal, u, v) with u x v == normal
        const SIDES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
        ];
        let h = size * 0.5;

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut uvs = Vec::with_capacity(24);
        let mut tangents = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u, v) in SIDES {
            let base = positions.len() as u32;
            let center = normal * h;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                positions.push(center + (u * su + v * sv) * h);
                normals.push(normal);
                uvs.push(Vec2::new((su + 1.0) * 0.5, (sv + 1.0) * 0.5));
                tangents.push(u.extend(1.0));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        let mut surface = ArraySurface::new(positions)
            .with_indices(indices)
            .with_normals(normals)
            .with_uvs(uvs)
            .with_tangents(tangents);
        surface.material = material;
        Self::from_surfaces(vec![surface])
    }
}

impl<M: Clone> MeshSource for ArrayMesh<M> {
    type Material = M;

    fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    fn surface_arrays(&self, surface: usize) -> Option<SurfaceArrays<'_>> {
        self.surfaces
            .get(surface)
            .filter(|s| !s.positions.is_empty())
            .map(ArraySurface::arrays)
    }

    fn surface_material(&self, surface: usize) -> Option<M> {
        self.surfaces.get(surface)?.material.clone()
    }
}
