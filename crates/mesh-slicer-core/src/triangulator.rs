//! Cap triangulation for cut cross-sections.
//!
//! The cut points collected while splitting faces are projected into a 2D frame
//! spanning the cutting plane, reduced to their convex hull with Andrew's monotone
//! chain, and fan-triangulated. Concave cross-sections are therefore capped by their
//! convex hull.

use glam::{Vec2, Vec3};

use crate::face::{Corner, Face};
use crate::options::SliceOptions;

/// Triangles sealing a cut, one set per side of the plane.
///
/// Both sets share the same vertices; `below` holds the faces of `above` with
/// reversed winding and negated normals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapFaces {
    /// Cap faces whose normal matches the plane normal.
    pub above: Vec<Face>,
    /// Cap faces whose normal is opposite to the plane normal.
    pub below: Vec<Face>,
}

impl CapFaces {
    /// Returns true if no cap could be built.
    pub fn is_empty(&self) -> bool {
        self.above.is_empty()
    }

    /// Returns the number of triangles per side.
    pub fn len(&self) -> usize {
        self.above.len()
    }
}

/// Builds an orthonormal basis `(u, v)` spanning the plane with the given normal.
///
/// The basis is right-handed with the normal: `u.cross(v) == normal`.
pub fn plane_basis(normal: Vec3) -> (Vec3, Vec3) {
    let n = normal.normalize_or_zero();
    let abs = n.abs();

    // Reference axis least aligned with the normal keeps the cross product well
    // conditioned.
    let reference = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };

    let u = reference.cross(n).normalize_or_zero();
    let v = n.cross(u);
    (u, v)
}

/// A cut point projected into the plane frame, remembering its 3D position.
#[derive(Debug, Clone, Copy)]
struct Projected {
    local: Vec2,
    position: Vec3,
}

/// Z component of `(a - o) x (b - o)`; positive for a counter-clockwise turn.
fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

/// Returns true if `a` does not turn left of the line from `o` to `b` by more than
/// `tolerance`.
fn is_reflex(o: Vec2, a: Vec2, b: Vec2, tolerance: f32) -> bool {
    // cross / |b - o| is the distance of `a` from the line
    cross(o, a, b) <= tolerance * (b - o).length()
}

/// Computes the convex hull of the points in counter-clockwise order.
///
/// Duplicate points and points within `weld_tolerance` of a hull edge are discarded,
/// so no two consecutive hull vertices are closer than `weld_tolerance`.
fn convex_hull(mut points: Vec<Projected>, weld_tolerance: f32) -> Vec<Projected> {
    let weld_sq = weld_tolerance * weld_tolerance;
    let is_close = |a: &Projected, b: &Projected| a.local.distance_squared(b.local) <= weld_sq;

    points.sort_by(|a, b| {
        a.local
            .x
            .total_cmp(&b.local.x)
            .then(a.local.y.total_cmp(&b.local.y))
    });
    points.dedup_by(|b, a| is_close(a, b));

    if points.len() < 3 {
        return points;
    }

    let mut lower: Vec<Projected> = Vec::with_capacity(points.len());
    for p in &points {
        while lower.len() >= 2
            && is_reflex(
                lower[lower.len() - 2].local,
                lower[lower.len() - 1].local,
                p.local,
                weld_tolerance,
            )
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Projected> = Vec::with_capacity(points.len());
    for p in points.iter().rev() {
        while upper.len() >= 2
            && is_reflex(
                upper[upper.len() - 2].local,
                upper[upper.len() - 1].local,
                p.local,
                weld_tolerance,
            )
        {
            upper.pop();
        }
        upper.push(*p);
    }

    // The last point of each chain is the first point of the other one
    lower.pop();
    upper.pop();
    lower.extend(upper);

    // Near-duplicates that were not neighbours in sort order meet again on the hull
    lower.dedup_by(|b, a| is_close(a, b));
    while lower.len() > 1 && is_close(&lower[0], &lower[lower.len() - 1]) {
        lower.pop();
    }
    lower
}

/// Triangulates the cross-section spanned by `points`, which lie on a plane with
/// the given normal.
///
/// Duplicate points are tolerated. Fewer than three distinct, non-collinear points
/// yield an empty cap.
pub fn monotone_chain(points: &[Vec3], normal: Vec3, options: &SliceOptions) -> CapFaces {
    let normal = normal.normalize_or_zero();
    let (u, v) = plane_basis(normal);

    let projected: Vec<Projected> = points
        .iter()
        .map(|&position| Projected {
            local: Vec2::new(position.dot(u), position.dot(v)),
            position,
        })
        .collect();

    let hull = convex_hull(projected, options.weld_tolerance);
    log::trace!(
        "cap hull has {} vertices from {} cut points",
        hull.len(),
        points.len()
    );
    if hull.len() < 3 {
        return CapFaces::default();
    }

    let (min, max) = hull.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), p| (min.min(p.local), max.max(p.local)),
    );
    let extent = (max - min).max(Vec2::splat(f32::EPSILON));

    let corner = |p: &Projected| {
        let corner = Corner::new(p.position)
            .with_normal(normal)
            .with_tangent(u.extend(1.0));
        if options.generate_cap_uvs {
            corner.with_uv((p.local - min) / extent)
        } else {
            corner
        }
    };

    let above: Vec<Face> = (1..hull.len() - 1)
        .map(|i| Face::new(corner(&hull[0]), corner(&hull[i]), corner(&hull[i + 1])))
        .collect();
    let below = above.iter().map(Face::flipped).collect();

    CapFaces { above, below }
}
