//! mesh-slicer: cut closed triangle meshes with a plane.
//!
//! Slicing produces the two halves of a mesh plus a triangulated cap sealing the
//! cut on each side, so both halves stay watertight.
//!
//! # Quick Start
//!
//! ```
//! use mesh_slicer::*;
//!
//! fn main() -> Result<()> {
//!     let cube = ArrayMesh::cube(1.0, Some("stone"));
//!     let plane = Plane::new(Vec3::Z, 0.0)?;
//!
//!     let sliced = slice(Some(&cube), &plane, Some("cut"))?.expect("plane crosses the cube");
//!     assert_eq!(sliced.upper().len(), 2);
//!
//!     let (upper, lower) = sliced.assemble(&IndexedMeshAssembler::default());
//!     assert_eq!(upper.num_triangles(), lower.num_triangles());
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! For every surface of the mesh, faces are extracted from the surface arrays and
//! split against the plane. Cut points from all surfaces are pooled and
//! triangulated once into the cap. A plane that leaves the whole mesh on one side
//! yields `None`; that is an expected outcome, not an error.
//!
//! Tolerances in [`SliceOptions`] are relative: they grow with the distance of the
//! farthest vertex from the origin, so large meshes classify cut corners the same
//! way unit-sized ones do.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

use mesh_slicer_structures::faces_from_surface;

// Re-export core types
pub use mesh_slicer_core::{
    monotone_chain, plane_basis, split_face_by_plane, CapFaces, Corner, Face, Plane, PlaneSide,
    Result, SliceOptions, SlicerError, SplitOutcome, SplitResult, Vec2, Vec3, Vec4,
    DEFAULT_EPSILON,
};

// Re-export structures
pub use mesh_slicer_structures::{
    ArrayMesh, ArraySurface, IndexedMesh, IndexedMeshAssembler, IndexedSurface, MeshAssembler,
    MeshSource, PrimitiveType, RenderVertex, SliceSide, SlicedMesh, SlicedSurface, SurfaceArrays,
};

/// Slices meshes with configurable options.
///
/// A `Slicer` holds no per-call state; one instance may be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Slicer {
    options: SliceOptions,
}

impl Slicer {
    /// Creates a slicer, validating the options.
    pub fn new(options: SliceOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Returns the options of this slicer.
    pub fn options(&self) -> &SliceOptions {
        &self.options
    }

    /// Returns an assembler matching the options of this slicer.
    pub fn assembler(&self) -> IndexedMeshAssembler {
        IndexedMeshAssembler::new(self.options.weld_vertices)
    }

    /// Slices `mesh` with `plane`, capping the cut with `cap_material`.
    ///
    /// Returns `Ok(None)` when there is no mesh or when the plane leaves every face on
    /// one side. Surfaces that are not made of triangles are skipped. Malformed
    /// surface buffers are reported as errors.
    ///
    /// Tolerances are scaled to the mesh with [`SliceOptions::scaled_to`].
    pub fn slice<S: MeshSource + ?Sized>(
        &self,
        mesh: Option<&S>,
        plane: &Plane,
        cap_material: Option<S::Material>,
    ) -> Result<Option<SlicedMesh<S::Material>>> {
        let Some(mesh) = mesh else {
            log::debug!("slice called without a mesh");
            return Ok(None);
        };

        let options = self.options.scaled_to(mesh.extent());
        let surface_count = mesh.surface_count();
        let mut split_results = Vec::with_capacity(surface_count);
        // Cut points are pooled across all surfaces
        let mut intersection_points = Vec::new();

        for surface in 0..surface_count {
            let mut result = SplitResult::new(mesh.surface_material(surface));
            for face in faces_from_surface(mesh, surface)? {
                split_face_by_plane(plane, &face, options.epsilon, &mut result);
            }

            log::trace!(
                "surface {surface}: {} above, {} below, {} cut points",
                result.above.len(),
                result.below.len(),
                result.intersection_points.len()
            );
            intersection_points.append(&mut result.intersection_points);
            split_results.push(result);
        }

        let has_above = split_results.iter().any(|r| !r.above.is_empty());
        let has_below = split_results.iter().any(|r| !r.below.is_empty());
        if !(has_above && has_below) || intersection_points.is_empty() {
            log::debug!("plane does not cut the mesh ({surface_count} surfaces)");
            return Ok(None);
        }

        let cap = monotone_chain(&intersection_points, plane.normal(), &options);
        if cap.is_empty() {
            log::debug!(
                "{} cut points collapse below the weld tolerance {}; halves are left open",
                intersection_points.len(),
                options.weld_tolerance
            );
        }
        log::debug!(
            "sliced {surface_count} surfaces: {} cut points, {} cap triangles per side",
            intersection_points.len(),
            cap.len()
        );

        Ok(Some(SlicedMesh::new(split_results, cap, cap_material)))
    }
}

/// Slices `mesh` with `plane` using default options.
///
/// See [`Slicer::slice`].
pub fn slice<S: MeshSource + ?Sized>(
    mesh: Option<&S>,
    plane: &Plane,
    cap_material: Option<S::Material>,
) -> Result<Option<SlicedMesh<S::Material>>> {
    Slicer::default().slice(mesh, plane, cap_material)
}
