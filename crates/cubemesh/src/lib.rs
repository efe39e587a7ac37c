mod appearance;
mod cube;
mod face;
mod mesh;

pub use appearance::{
    by_id, Appearance, FaceAppearanceMap, APPEARANCE_REGISTRY, DEFAULT_APPEARANCE,
};
pub use cube::{Cube, CubeError};
pub use face::Face;
pub use mesh::{generate_cube_mesh, DefaultMeshBuilder, Mesh, MeshBuilder, MeshData, Triangle};

// Re-export glam for convenience
pub use glam;
