//! The two halves produced by a slice.

use mesh_slicer_core::{CapFaces, Face, SplitResult};

use crate::assembler::MeshAssembler;

/// One side of a cutting plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceSide {
    /// The side the plane normal points to.
    Above,
    /// The opposite side.
    Below,
}

/// Faces of one half that share a material.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedSurface<M> {
    /// Triangles of the surface.
    pub faces: Vec<Face>,
    /// Material inherited from the source surface, or the cross-section material
    /// for cap surfaces.
    pub material: Option<M>,
}

impl<M> SlicedSurface<M> {
    /// Returns the summed area of the faces.
    pub fn area(&self) -> f32 {
        self.faces.iter().map(Face::area).sum()
    }
}

/// The result of a successful slice: two halves, each a list of surfaces.
///
/// Each half holds, in source order, one surface for every source surface that left
/// faces on that side, followed by a single cap surface carrying the cross-section
/// material when a cap could be built.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedMesh<M> {
    upper: Vec<SlicedSurface<M>>,
    lower: Vec<SlicedSurface<M>>,
}

impl<M: Clone> SlicedMesh<M> {
    /// Packages per-surface split results and the cap faces into two halves.
    pub fn new(
        split_results: Vec<SplitResult<M>>,
        cap: CapFaces,
        cap_material: Option<M>,
    ) -> Self {
        let mut upper = Vec::with_capacity(split_results.len() + 1);
        let mut lower = Vec::with_capacity(split_results.len() + 1);

        for result in split_results {
            if !result.above.is_empty() {
                upper.push(SlicedSurface {
                    faces: result.above,
                    material: result.material.clone(),
                });
            }
            if !result.below.is_empty() {
                lower.push(SlicedSurface {
                    faces: result.below,
                    material: result.material,
                });
            }
        }

        if !cap.is_empty() {
            upper.push(SlicedSurface {
                faces: cap.above,
                material: cap_material.clone(),
            });
            lower.push(SlicedSurface {
                faces: cap.below,
                material: cap_material,
            });
        }

        Self { upper, lower }
    }
}

impl<M> SlicedMesh<M> {
    /// Returns the surfaces above the plane.
    pub fn upper(&self) -> &[SlicedSurface<M>] {
        &self.upper
    }

    /// Returns the surfaces below the plane.
    pub fn lower(&self) -> &[SlicedSurface<M>] {
        &self.lower
    }

    /// Returns the surfaces of the given side.
    pub fn side(&self, side: SliceSide) -> &[SlicedSurface<M>] {
        match side {
            SliceSide::Above => &self.upper,
            SliceSide::Below => &self.lower,
        }
    }

    /// Returns the total number of faces on the given side.
    pub fn face_count(&self, side: SliceSide) -> usize {
        self.side(side).iter().map(|s| s.faces.len()).sum()
    }

    /// Consumes the mesh, returning the upper and lower surfaces.
    pub fn into_parts(self) -> (Vec<SlicedSurface<M>>, Vec<SlicedSurface<M>>) {
        (self.upper, self.lower)
    }

    /// Builds a renderable form of both halves.
    pub fn assemble<A: MeshAssembler<M>>(&self, assembler: &A) -> (A::Output, A::Output) {
        (assembler.assemble(&self.upper), assembler.assemble(&self.lower))
    }
}
