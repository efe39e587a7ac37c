use crate::appearance::{Appearance, FaceAppearanceMap, DEFAULT_APPEARANCE};
use crate::mesh::{generate_cube_mesh, Mesh};
use glam::Vec3;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CubeError {
    #[error("Invalid edge length {0}: must be positive")]
    InvalidDimension(f32),
}

type Result<T> = std::result::Result<T, CubeError>;

/// Axis-aligned cube owning its generated surface mesh
///
/// The mesh is generated completely during construction and is read-only
/// afterwards; changing origin, edge length or appearances means
/// constructing a new cube.
#[derive(Debug, Clone)]
pub struct Cube {
    origin: Vec3,
    edge: f32,
    mesh: Mesh,
}

impl Cube {
    /// Build a cube with the default appearance on all faces
    ///
    /// `origin` is the minimum corner, `edge` the edge length. Fails with
    /// [`CubeError::InvalidDimension`] unless `edge` is positive.
    pub fn new(origin: Vec3, edge: f32) -> Result<Self> {
        Self::with_appearances(origin, edge, FaceAppearanceMap::new(), DEFAULT_APPEARANCE)
    }

    /// Build a cube with per-face appearances
    ///
    /// `appearances` may be partial; faces without an entry use
    /// `default_appearance`.
    pub fn with_appearances(
        origin: Vec3,
        edge: f32,
        appearances: FaceAppearanceMap,
        default_appearance: Appearance,
    ) -> Result<Self> {
        if edge <= 0.0 {
            return Err(CubeError::InvalidDimension(edge));
        }

        let mut mesh = Mesh::new();
        generate_cube_mesh(origin, edge, &appearances, default_appearance, &mut mesh);

        Ok(Self { origin, edge, mesh })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn edge_length(&self) -> f32 {
        self.edge
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}
