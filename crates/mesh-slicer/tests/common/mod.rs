//! Shared helpers for integration tests.

#![allow(dead_code)]

use mesh_slicer::{ArrayMesh, ArraySurface, Face, Plane, SliceSide, SlicedMesh, Vec3};

/// Material tag of source surfaces.
pub const BODY: u8 = 1;
/// Material tag of cap surfaces.
pub const CAP: u8 = 2;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const OCTAHEDRON: [[u32; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
];

fn octahedron_positions(radius: f32, center: Vec3) -> Vec<Vec3> {
    vec![
        center + Vec3::X * radius,
        center - Vec3::X * radius,
        center + Vec3::Y * radius,
        center - Vec3::Y * radius,
        center + Vec3::Z * radius,
        center - Vec3::Z * radius,
    ]
}

/// Regular octahedron with the given radius and center.
pub fn octahedron(radius: f32, center: Vec3) -> ArrayMesh<u8> {
    let positions = octahedron_positions(radius, center);
    ArrayMesh::from_surfaces(vec![
        ArraySurface::from_triangles(positions, &OCTAHEDRON).with_material(BODY)
    ])
}

/// Octahedron with shared vertices carrying radial normals, so that assembled
/// vertices weld across faces.
pub fn smooth_octahedron(radius: f32, center: Vec3) -> ArrayMesh<u8> {
    let positions = octahedron_positions(radius, center);
    let normals = positions.iter().map(|p| (*p - center).normalize()).collect();
    ArrayMesh::from_surfaces(vec![ArraySurface::from_triangles(positions, &OCTAHEDRON)
        .with_normals(normals)
        .with_material(BODY)])
}

/// Faces of the non-cap surfaces on one side.
pub fn body_faces(sliced: &SlicedMesh<u8>, side: SliceSide) -> Vec<Face> {
    sliced
        .side(side)
        .iter()
        .filter(|s| s.material != Some(CAP))
        .flat_map(|s| s.faces.iter().copied())
        .collect()
}

/// Faces of the cap surface on one side.
pub fn cap_faces(sliced: &SlicedMesh<u8>, side: SliceSide) -> Vec<Face> {
    sliced
        .side(side)
        .iter()
        .filter(|s| s.material == Some(CAP))
        .flat_map(|s| s.faces.iter().copied())
        .collect()
}

pub fn area(faces: &[Face]) -> f32 {
    faces.iter().map(Face::area).sum()
}

/// Smallest distance from any corner of the faces to the plane.
pub fn min_signed_distance(faces: &[Face], plane: &Plane) -> f32 {
    faces
        .iter()
        .flat_map(|f| f.corners.iter())
        .map(|c| plane.signed_distance(c.position))
        .fold(f32::INFINITY, f32::min)
}

pub fn max_signed_distance(faces: &[Face], plane: &Plane) -> f32 {
    faces
        .iter()
        .flat_map(|f| f.corners.iter())
        .map(|c| plane.signed_distance(c.position))
        .fold(f32::NEG_INFINITY, f32::max)
}
