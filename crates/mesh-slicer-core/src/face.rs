//! Self-contained triangular faces.
//!
//! A [`Face`] owns the full data of its three corners, so the slicing pipeline can
//! split and rebuild triangles without touching the buffers they came from.

use glam::{Vec2, Vec3, Vec4};

/// One corner of a face: a position plus optional interpolated attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corner {
    /// Position of the corner.
    pub position: Vec3,
    /// Shading normal.
    pub normal: Option<Vec3>,
    /// Texture coordinate.
    pub uv: Option<Vec2>,
    /// Tangent with handedness stored in `w`.
    pub tangent: Option<Vec4>,
    /// Vertex color.
    pub color: Option<Vec4>,
}

impl Corner {
    /// Creates a corner with only a position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Sets the normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = Some(normal);
        self
    }

    /// Sets the texture coordinate.
    #[must_use]
    pub fn with_uv(mut self, uv: Vec2) -> Self {
        self.uv = Some(uv);
        self
    }

    /// Sets the tangent.
    #[must_use]
    pub fn with_tangent(mut self, tangent: Vec4) -> Self {
        self.tangent = Some(tangent);
        self
    }

    /// Sets the color.
    #[must_use]
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = Some(color);
        self
    }

    /// Interpolates between two corners.
    ///
    /// Every attribute present on both corners is interpolated with the same `t`.
    /// Normals and tangent directions are re-normalized; the tangent handedness is
    /// taken from `self`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let normal = self
            .normal
            .zip(other.normal)
            .map(|(a, b)| a.lerp(b, t).normalize_or_zero());
        let uv = self.uv.zip(other.uv).map(|(a, b)| a.lerp(b, t));
        let tangent = self.tangent.zip(other.tangent).map(|(a, b)| {
            let direction = a.truncate().lerp(b.truncate(), t).normalize_or_zero();
            direction.extend(a.w)
        });
        let color = self.color.zip(other.color).map(|(a, b)| a.lerp(b, t));

        Self {
            position: self.position.lerp(other.position, t),
            normal,
            uv,
            tangent,
            color,
        }
    }

    /// Returns the corner as seen from the back side: normal negated and tangent
    /// handedness flipped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: self.normal.map(|n| -n),
            tangent: self.tangent.map(|t| t.truncate().extend(-t.w)),
            ..*self
        }
    }
}

/// A triangle with per-corner data.
///
/// Corners are stored in winding order; the geometric normal is
/// `(c1 - c0) x (c2 - c0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// The three corners in winding order.
    pub corners: [Corner; 3],
}

impl Face {
    /// Creates a face from three corners.
    pub fn new(a: Corner, b: Corner, c: Corner) -> Self {
        Self {
            corners: [a, b, c],
        }
    }

    /// Creates a face with positions only.
    pub fn from_positions(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::new(Corner::new(a), Corner::new(b), Corner::new(c))
    }

    /// Returns the three corner positions.
    pub fn positions(&self) -> [Vec3; 3] {
        self.corners.map(|c| c.position)
    }

    /// Returns the unit geometric normal, or zero for a degenerate face.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.positions();
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Returns the area of the face.
    pub fn area(&self) -> f32 {
        let [a, b, c] = self.positions();
        (b - a).cross(c - a).length() * 0.5
    }

    /// Returns the face with reversed winding, as seen from the other side.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.corners;
        Self::new(a.flipped(), c.flipped(), b.flipped())
    }
}
