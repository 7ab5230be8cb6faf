//! Mesh loading
//!
//! Thin wrapper over `tobj`: loads a Wavefront OBJ file and flattens the
//! vertex positions of all sub-meshes into one combined point cloud. Only
//! positions are used; topology, normals and materials are ignored.

use crate::error::{MapError, MapResult};
use glam::Vec3;
use std::path::Path;

/// Load a mesh file and return its merged vertex positions
pub fn load_vertices(path: impl AsRef<Path>) -> MapResult<Vec<Vec3>> {
    let (models, _materials) = tobj::load_obj(path.as_ref(), &tobj::LoadOptions::default())?;

    let mut vertices = Vec::new();
    for model in &models {
        for position in model.mesh.positions.chunks_exact(3) {
            vertices.push(Vec3::new(position[0], position[1], position[2]));
        }
    }
    if vertices.is_empty() {
        return Err(MapError::EmptyMesh);
    }
    tracing::debug!(
        models = models.len(),
        vertices = vertices.len(),
        "mesh loaded"
    );
    Ok(vertices)
}
