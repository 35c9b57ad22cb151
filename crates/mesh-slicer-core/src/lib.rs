//! Core geometry for mesh-slicer.
//!
//! This crate provides the host-independent part of the slicing pipeline:
//! - [`Plane`] and point classification against it
//! - [`Face`], a self-contained triangle with per-corner attributes
//! - [`split_face_by_plane`] for splitting one face into above/below pieces
//! - [`monotone_chain`] for triangulating the cut cross-section into cap faces
//! - [`SliceOptions`] and the [`SlicerError`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod face;
pub mod intersector;
pub mod options;
pub mod plane;
pub mod triangulator;

pub use error::{Result, SlicerError};
pub use face::{Corner, Face};
pub use intersector::{split_face_by_plane, SplitOutcome, SplitResult};
pub use options::{SliceOptions, DEFAULT_EPSILON, DEFAULT_WELD_TOLERANCE};
pub use plane::{Plane, PlaneSide};
pub use triangulator::{monotone_chain, plane_basis, CapFaces};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3, Vec4};
