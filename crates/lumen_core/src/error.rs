use thiserror::Error;

/// Errors found while building or validating a scene.
///
/// All of these are construction mistakes. The renderer validates a scene
/// once per frame and refuses to trace a scene that fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("{kind} {primitive} uses material {index}, but the scene has {material_count} materials")]
    InvalidMaterialIndex {
        kind: &'static str,
        primitive: usize,
        index: u8,
        material_count: usize,
    },

    #[error("Material table is full ({0} materials)")]
    MaterialTableFull(usize),

    #[error("Mesh {mesh} references vertex {index}, but has {vertex_count} vertices")]
    MeshIndexOutOfRange {
        mesh: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("Mesh {mesh} has {normals} normals for {triangles} triangles")]
    MeshNormalCount {
        mesh: usize,
        normals: usize,
        triangles: usize,
    },

    #[error("Mesh {mesh} world-space cache is out of date, call update_transforms")]
    StaleMeshCache { mesh: usize },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
