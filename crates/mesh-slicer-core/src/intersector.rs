//! Splitting faces against a plane.
//!
//! Each face is classified corner by corner. Faces entirely on one side are passed
//! through untouched; faces that straddle the plane are clipped into one polygon per
//! side and fan-triangulated, keeping the original winding.

use glam::Vec3;

use crate::face::{Corner, Face};
use crate::plane::{side_of, Plane, PlaneSide};

/// Accumulated output of splitting the faces of one surface.
#[derive(Debug, Clone)]
pub struct SplitResult<M> {
    /// Faces (or face pieces) above the plane.
    pub above: Vec<Face>,
    /// Faces (or face pieces) below the plane.
    pub below: Vec<Face>,
    /// Material of the surface the faces came from.
    pub material: Option<M>,
    /// Points where face edges cross the plane, plus corners lying on it.
    pub intersection_points: Vec<Vec3>,
}

impl<M> Default for SplitResult<M> {
    fn default() -> Self {
        Self {
            above: Vec::new(),
            below: Vec::new(),
            material: None,
            intersection_points: Vec::new(),
        }
    }
}

impl<M> SplitResult<M> {
    /// Creates an empty result carrying the given material.
    pub fn new(material: Option<M>) -> Self {
        Self {
            material,
            ..Self::default()
        }
    }

    /// Returns true if no face ended up on either side.
    pub fn is_empty(&self) -> bool {
        self.above.is_empty() && self.below.is_empty()
    }
}

/// What happened to a single face during splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The face was kept whole on the above side.
    Above,
    /// The face was kept whole on the below side.
    Below,
    /// The face crossed the plane and was split across both sides.
    Split,
    /// Every corner lay on the plane; the face was discarded.
    Dropped,
}

/// Splits a face by a plane, appending the pieces to `result`.
///
/// Corners within `epsilon` of the plane count as lying on it. Such corners never
/// create new vertices and are always reported as intersection points, whether the
/// face is split or kept whole; a plane running through a ring of vertices cuts the
/// mesh without crossing any edge. Every strict above/below edge crossing adds an
/// interpolated vertex to both sides, snapped onto the plane.
pub fn split_face_by_plane<M>(
    plane: &Plane,
    face: &Face,
    epsilon: f32,
    result: &mut SplitResult<M>,
) -> SplitOutcome {
    let distances = face.corners.map(|c| plane.signed_distance(c.position));
    let sides = distances.map(|d| side_of(d, epsilon));

    let has_above = sides.contains(&PlaneSide::Above);
    let has_below = sides.contains(&PlaneSide::Below);

    match (has_above, has_below) {
        (false, false) => return SplitOutcome::Dropped,
        (true, false) => {
            push_on_corners(face, &sides, result);
            result.above.push(*face);
            return SplitOutcome::Above;
        }
        (false, true) => {
            push_on_corners(face, &sides, result);
            result.below.push(*face);
            return SplitOutcome::Below;
        }
        (true, true) => {}
    }

    // Walk the ring, emitting each corner to the side(s) it belongs to and an
    // interpolated corner wherever an edge crosses strictly.
    let mut above: Vec<Corner> = Vec::with_capacity(4);
    let mut below: Vec<Corner> = Vec::with_capacity(4);

    for i in 0..3 {
        let j = (i + 1) % 3;
        let corner = face.corners[i];

        match sides[i] {
            PlaneSide::Above => above.push(corner),
            PlaneSide::Below => below.push(corner),
            PlaneSide::On => {
                above.push(corner);
                below.push(corner);
                result.intersection_points.push(corner.position);
            }
        }

        if crosses(sides[i], sides[j]) {
            let cut = cut_edge(plane, (&corner, distances[i]), (&face.corners[j], distances[j]));
            above.push(cut);
            below.push(cut);
            result.intersection_points.push(cut.position);
        }
    }

    triangulate_fan(&above, &mut result.above);
    triangulate_fan(&below, &mut result.below);
    SplitOutcome::Split
}

fn push_on_corners<M>(face: &Face, sides: &[PlaneSide; 3], result: &mut SplitResult<M>) {
    for (corner, side) in face.corners.iter().zip(sides) {
        if *side == PlaneSide::On {
            result.intersection_points.push(corner.position);
        }
    }
}

/// Interpolates the crossing point of an edge, snapped onto the plane.
///
/// The edge is always walked from its lexicographically smaller endpoint, so the two
/// faces sharing it produce bit-identical cut corners.
fn cut_edge(plane: &Plane, a: (&Corner, f32), b: (&Corner, f32)) -> Corner {
    let ((from, d_from), (to, d_to)) = if is_before(a.0.position, b.0.position) {
        (a, b)
    } else {
        (b, a)
    };
    let t = d_from / (d_from - d_to);
    let mut cut = from.lerp(to, t);
    cut.position = plane.project(cut.position);
    cut
}

fn is_before(a: Vec3, b: Vec3) -> bool {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then(a.z.total_cmp(&b.z))
        .is_le()
}

fn crosses(a: PlaneSide, b: PlaneSide) -> bool {
    matches!(
        (a, b),
        (PlaneSide::Above, PlaneSide::Below) | (PlaneSide::Below, PlaneSide::Above)
    )
}

/// Fan-triangulates a convex polygon from its first corner.
fn triangulate_fan(polygon: &[Corner], out: &mut Vec<Face>) {
    if polygon.len() < 3 {
        return;
    }
    for i in 1..polygon.len() - 1 {
        out.push(Face::new(polygon[0], polygon[i], polygon[i + 1]));
    }
}
