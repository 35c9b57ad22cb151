//! Conversion of host surface arrays into self-contained faces.

use mesh_slicer_core::{Corner, Face, Result, SlicerError};

use crate::mesh::{MeshSource, PrimitiveType, SurfaceArrays};

/// Extracts the faces of one surface of a mesh.
///
/// A surface without primitive data yields no faces. So does a surface made of
/// lines or points, which is skipped with a warning.
pub fn faces_from_surface<S: MeshSource + ?Sized>(mesh: &S, surface: usize) -> Result<Vec<Face>> {
    let Some(arrays) = mesh.surface_arrays(surface) else {
        log::trace!("surface {surface} has no primitive data");
        return Ok(Vec::new());
    };
    if !is_triangulated(arrays.primitive) {
        log::warn!(
            "skipping surface {surface}: unsupported primitive {}",
            arrays.primitive
        );
        return Ok(Vec::new());
    }
    let faces = faces_from_arrays(&arrays)?;
    log::trace!("surface {surface}: {} faces", faces.len());
    Ok(faces)
}

/// Extracts one [`Face`] per triangle, in buffer order and keeping the original
/// winding.
///
/// Triangle lists and triangle strips are supported, indexed or not. Degenerate
/// triangles are passed through unchanged.
pub fn faces_from_arrays(arrays: &SurfaceArrays<'_>) -> Result<Vec<Face>> {
    if arrays.positions.is_empty() {
        return Ok(Vec::new());
    }
    if !is_triangulated(arrays.primitive) {
        return Err(SlicerError::UnsupportedPrimitive(arrays.primitive.to_string()));
    }

    let vertex_count = arrays.positions.len();
    check_len("normals", arrays.normals.map(<[_]>::len), vertex_count)?;
    check_len("uvs", arrays.uvs.map(<[_]>::len), vertex_count)?;
    check_len("tangents", arrays.tangents.map(<[_]>::len), vertex_count)?;
    check_len("colors", arrays.colors.map(<[_]>::len), vertex_count)?;

    let element_count = arrays.indices.map_or(vertex_count, <[_]>::len);
    if let Some(indices) = arrays.indices {
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(SlicerError::IndexOutOfBounds {
                index,
                vertex_count,
            });
        }
    }

    let vertex_at = |element: usize| -> usize {
        arrays
            .indices
            .map_or(element, |indices| indices[element] as usize)
    };
    let corner = |element: usize| corner_at(arrays, vertex_at(element));

    let faces = match arrays.primitive {
        PrimitiveType::Triangles => {
            if element_count % 3 != 0 {
                return Err(SlicerError::InvalidIndexCount(element_count));
            }
            (0..element_count / 3)
                .map(|t| Face::new(corner(3 * t), corner(3 * t + 1), corner(3 * t + 2)))
                .collect()
        }
        _ => (0..element_count.saturating_sub(2))
            .map(|t| {
                // Every other strip triangle is swapped to keep a consistent winding
                if t % 2 == 0 {
                    Face::new(corner(t), corner(t + 1), corner(t + 2))
                } else {
                    Face::new(corner(t + 1), corner(t), corner(t + 2))
                }
            })
            .collect(),
    };

    Ok(faces)
}

fn is_triangulated(primitive: PrimitiveType) -> bool {
    matches!(
        primitive,
        PrimitiveType::Triangles | PrimitiveType::TriangleStrip
    )
}

fn check_len(attribute: &'static str, actual: Option<usize>, expected: usize) -> Result<()> {
    match actual {
        Some(actual) if actual != expected => Err(SlicerError::SizeMismatch {
            attribute,
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}

fn corner_at(arrays: &SurfaceArrays<'_>, vertex: usize) -> Corner {
    Corner {
        position: arrays.positions[vertex],
        normal: arrays.normals.map(|n| n[vertex]),
        uv: arrays.uvs.map(|uv| uv[vertex]),
        tangent: arrays.tangents.map(|t| t[vertex]),
        color: arrays.colors.map(|c| c[vertex]),
    }
}
