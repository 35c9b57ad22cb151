//! Property tests over random planes and closed meshes.

mod common;

use common::{
    area, body_faces, cap_faces, max_signed_distance, min_signed_distance, octahedron, BODY, CAP,
};
use mesh_slicer::{
    split_face_by_plane, ArrayMesh, MeshSource, Plane, SliceSide, SlicedMesh, Slicer, SplitOutcome,
    SplitResult, Vec3,
};
use proptest::prelude::*;

const AREA_TOLERANCE: f32 = 1e-4;

fn normal_strategy() -> impl Strategy<Value = Vec3> {
    (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        .prop_filter("normal must not be degenerate", |n| n.length() > 0.1)
}

fn mesh_strategy() -> impl Strategy<Value = ArrayMesh<u8>> {
    let unit = prop_oneof![
        (0.5f32..2.0).prop_map(|size| ArrayMesh::cube(size, Some(BODY))),
        (0.5f32..2.0, -0.3f32..0.3, -0.3f32..0.3, -0.3f32..0.3)
            .prop_map(|(r, x, y, z)| octahedron(r, Vec3::new(x, y, z))),
    ];
    let large = prop_oneof![
        (20.0f32..400.0).prop_map(|size| ArrayMesh::cube(size, Some(BODY))),
        (10.0f32..200.0, -3.0f32..3.0, -3.0f32..3.0, -3.0f32..3.0)
            .prop_map(|(r, x, y, z)| octahedron(r, Vec3::new(x, y, z))),
    ];
    prop_oneof![unit, large]
}

/// Plane-distance tolerance the default slicer uses for this mesh.
fn epsilon_for(mesh: &ArrayMesh<u8>) -> f32 {
    Slicer::default().options().scaled_to(mesh.extent()).epsilon
}

fn positions(mesh: &ArrayMesh<u8>) -> Vec<Vec3> {
    mesh.surfaces()
        .iter()
        .flat_map(|s| s.positions().iter().copied())
        .collect()
}

fn mesh_area(mesh: &ArrayMesh<u8>) -> f32 {
    (0..mesh.surface_count())
        .map(|i| {
            let arrays = mesh.surface_arrays(i).unwrap();
            arrays
                .indices
                .unwrap()
                .chunks_exact(3)
                .map(|t| {
                    let [a, b, c] = [0, 1, 2].map(|k| arrays.positions[t[k] as usize]);
                    (b - a).cross(c - a).length() * 0.5
                })
                .sum::<f32>()
        })
        .sum()
}

fn slice_mesh(mesh: &ArrayMesh<u8>, plane: &Plane) -> Option<SlicedMesh<u8>> {
    Slicer::default().slice(Some(mesh), plane, Some(CAP)).unwrap()
}

proptest! {
    #[test]
    fn prop_area_is_conserved(
        mesh in mesh_strategy(),
        normal in normal_strategy(),
        distance in -0.4f32..0.4,
    ) {
        let plane = Plane::new(normal, distance).unwrap();
        let verts = positions(&mesh);
        let clearance = 1e-3 * mesh.extent().max(1.0);
        prop_assume!(verts.iter().all(|p| plane.signed_distance(*p).abs() > clearance));

        let total = mesh_area(&mesh);
        match slice_mesh(&mesh, &plane) {
            Some(sliced) => {
                let upper = area(&body_faces(&sliced, SliceSide::Above));
                let lower = area(&body_faces(&sliced, SliceSide::Below));
                prop_assert!((upper + lower - total).abs() <= total * AREA_TOLERANCE);
            }
            None => {
                // Missed entirely: every vertex is on the same side
                let above = verts.iter().filter(|p| plane.signed_distance(**p) > 0.0).count();
                prop_assert!(above == 0 || above == verts.len());
            }
        }
    }

    #[test]
    fn prop_faces_stay_on_their_side(
        mesh in mesh_strategy(),
        normal in normal_strategy(),
        distance in -0.4f32..0.4,
    ) {
        let plane = Plane::new(normal, distance).unwrap();
        let epsilon = epsilon_for(&mesh);
        if let Some(sliced) = slice_mesh(&mesh, &plane) {
            let upper = body_faces(&sliced, SliceSide::Above);
            let lower = body_faces(&sliced, SliceSide::Below);
            prop_assert!(!upper.is_empty() && !lower.is_empty());
            prop_assert!(min_signed_distance(&upper, &plane) >= -epsilon);
            prop_assert!(max_signed_distance(&lower, &plane) <= epsilon);
        }
    }

    #[test]
    fn prop_reclassified_pieces_are_not_split_again(
        mesh in mesh_strategy(),
        normal in normal_strategy(),
        distance in -0.4f32..0.4,
    ) {
        let plane = Plane::new(normal, distance).unwrap();
        let epsilon = epsilon_for(&mesh);
        if let Some(sliced) = slice_mesh(&mesh, &plane) {
            let mut scratch = SplitResult::<u8>::default();
            for face in body_faces(&sliced, SliceSide::Above) {
                let outcome = split_face_by_plane(&plane, &face, epsilon, &mut scratch);
                prop_assert_eq!(outcome, SplitOutcome::Above);
            }
            for face in body_faces(&sliced, SliceSide::Below) {
                let outcome = split_face_by_plane(&plane, &face, epsilon, &mut scratch);
                prop_assert_eq!(outcome, SplitOutcome::Below);
            }
        }
    }

    #[test]
    fn prop_caps_mirror_each_other(
        mesh in mesh_strategy(),
        normal in normal_strategy(),
        distance in -0.4f32..0.4,
    ) {
        let plane = Plane::new(normal, distance).unwrap();
        let verts = positions(&mesh);
        let clearance = 1e-3 * mesh.extent().max(1.0);
        prop_assume!(verts.iter().all(|p| plane.signed_distance(*p).abs() > clearance));
        let epsilon = epsilon_for(&mesh);
        let extent = mesh.extent().max(1.0);

        if let Some(sliced) = slice_mesh(&mesh, &plane) {
            let up = cap_faces(&sliced, SliceSide::Above);
            let down = cap_faces(&sliced, SliceSide::Below);
            prop_assert!(!up.is_empty());
            prop_assert_eq!(up.len(), down.len());

            for (a, b) in up.iter().zip(&down) {
                let [p0, p1, p2] = a.positions();
                prop_assert_eq!(b.positions(), [p0, p2, p1]);
                if a.area() > 1e-6 * extent * extent {
                    prop_assert!(a.normal().dot(plane.normal()) > 0.0);
                    prop_assert!(b.normal().dot(plane.normal()) < 0.0);
                }
                for p in a.positions() {
                    prop_assert!(plane.signed_distance(p).abs() <= epsilon);
                }
            }
        }
    }

    #[test]
    fn prop_distant_plane_is_a_no_op(
        mesh in mesh_strategy(),
        normal in normal_strategy(),
        offset in 0.5f32..50.0,
        flip in any::<bool>(),
    ) {
        // Beyond the farthest vertex from the origin
        let offset = mesh.extent() + offset;
        let distance = if flip { -offset } else { offset };
        let plane = Plane::new(normal.normalize(), distance).unwrap();
        prop_assert!(slice_mesh(&mesh, &plane).is_none());
    }
}
