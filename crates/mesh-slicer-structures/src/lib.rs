//! Mesh structures for mesh-slicer.
//!
//! This crate provides the data structures around the geometric core:
//! - [`MeshSource`], the read-only contract a host mesh implements
//! - [`ArrayMesh`], an owned mesh of attribute arrays
//! - Face extraction from surface arrays
//! - [`SlicedMesh`], the two halves of a slice
//! - [`MeshAssembler`] and the default [`IndexedMeshAssembler`]

// Mesh code intentionally casts between buffer indices and vertex counts
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod assembler;
pub mod extract;
pub mod mesh;
pub mod sliced_mesh;

pub use assembler::{IndexedMesh, IndexedMeshAssembler, IndexedSurface, MeshAssembler, RenderVertex};
pub use extract::{faces_from_arrays, faces_from_surface};
pub use mesh::{ArrayMesh, ArraySurface, MeshSource, PrimitiveType, SurfaceArrays};
pub use sliced_mesh::{SliceSide, SlicedMesh, SlicedSurface};
