use crate::appearance::{Appearance, FaceAppearanceMap};
use crate::face::Face;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single flat-shaded triangle
///
/// The vertex order defines the facing: vertices wind counter-clockwise
/// when seen from the side the triangle faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub appearance: Appearance,
}

impl Triangle {
    pub fn new(vertices: [Vec3; 3], appearance: Appearance) -> Self {
        Self {
            vertices,
            appearance,
        }
    }

    /// Outward unit normal implied by the vertex winding
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).normalize()
    }
}

/// Builder interface for constructing meshes
pub trait MeshBuilder {
    /// Add a single face to the mesh
    ///
    /// # Arguments
    /// * `vertices` - Four vertices forming a quad (counter-clockwise)
    /// * `normal` - Outward normal vector for the face
    /// * `appearance` - Resolved appearance for the face
    fn add_face(&mut self, vertices: [Vec3; 4], normal: Vec3, appearance: Appearance);
}

/// Triangle mesh accumulated from quad faces
///
/// Read-only once construction completes; adjacent faces keep their own
/// copies of coincident corner points (flat-shaded, no vertex welding).
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Flatten the triangle list into renderer-handoff buffers
    pub fn to_mesh_data(&self) -> MeshData {
        let mut data = MeshData::new();
        for triangle in &self.triangles {
            let base_index = data.vertices.len() as u32 / 3;
            let normal = triangle.normal();
            for vertex in &triangle.vertices {
                data.vertices.extend_from_slice(&vertex.to_array());
                data.normals.extend_from_slice(&normal.to_array());
                data.colors.extend_from_slice(&triangle.appearance.color.to_array());
            }
            data.indices
                .extend_from_slice(&[base_index, base_index + 1, base_index + 2]);
        }
        data
    }
}

impl MeshBuilder for Mesh {
    fn add_face(&mut self, vertices: [Vec3; 4], _normal: Vec3, appearance: Appearance) {
        let [p0, p1, p2, p3] = vertices;

        // Split along the p0-p2 diagonal, identically for every face
        self.triangles.push(Triangle::new([p0, p1, p2], appearance));
        self.triangles.push(Triangle::new([p0, p2, p3], appearance));
    }
}

/// Flat mesh buffers for handoff to a rendering surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
}

impl MeshData {
    pub fn new() -> Self {
        MeshData {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
        }
    }
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new()
    }
}

/// Default mesh builder that accumulates data into flat vectors
pub struct DefaultMeshBuilder {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    vertex_count: u32,
}

impl DefaultMeshBuilder {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            vertex_count: 0,
        }
    }

    pub fn into_mesh_data(self) -> MeshData {
        MeshData {
            vertices: self.vertices,
            indices: self.indices,
            normals: self.normals,
            colors: self.colors,
        }
    }
}

impl Default for DefaultMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshBuilder for DefaultMeshBuilder {
    fn add_face(&mut self, vertices: [Vec3; 4], normal: Vec3, appearance: Appearance) {
        let base_index = self.vertex_count;

        // Add vertices
        for vertex in &vertices {
            self.vertices.extend_from_slice(&vertex.to_array());
            self.normals.extend_from_slice(&normal.to_array());
            self.colors.extend_from_slice(&appearance.color.to_array());
        }

        // Add indices for two triangles (0,1,2) and (0,2,3)
        self.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);

        self.vertex_count += 4;
    }
}

/// Generate the six faces of an axis-aligned cube into a mesh builder
///
/// Walks all faces in `Face::ALL` order, resolves each face's appearance
/// (explicit map entry or the default) and emits one quad per face.
/// Callers are responsible for validating `size`; a non-positive size
/// produces degenerate geometry.
///
/// # Arguments
/// * `origin` - Minimum corner of the cube
/// * `size` - Edge length
/// * `appearances` - Per-face appearance assignment (may be partial)
/// * `default_appearance` - Fallback for unassigned faces
/// * `builder` - MeshBuilder to receive the faces
pub fn generate_cube_mesh<B: MeshBuilder>(
    origin: Vec3,
    size: f32,
    appearances: &FaceAppearanceMap,
    default_appearance: Appearance,
    builder: &mut B,
) {
    let mut face_count = 0;
    for face in Face::iter() {
        let appearance = appearances
            .get(&face)
            .copied()
            .unwrap_or(default_appearance);
        builder.add_face(face.vertices(origin, size), face.normal(), appearance);
        face_count += 1;
    }

    tracing::debug!(
        "[generate_cube_mesh] Generated {} faces at origin={} size={}",
        face_count,
        origin,
        size
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{by_id, DEFAULT_APPEARANCE};

    fn triangle_area(t: &Triangle) -> f32 {
        let [v0, v1, v2] = t.vertices;
        (v1 - v0).cross(v2 - v0).length() / 2.0
    }

    #[test]
    fn test_mesh_splits_on_fixed_diagonal() {
        let quad = [
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        let mut mesh = Mesh::new();
        mesh.add_face(quad, Vec3::Z, DEFAULT_APPEARANCE);

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles()[0].vertices, [quad[0], quad[1], quad[2]]);
        assert_eq!(mesh.triangles()[1].vertices, [quad[0], quad[2], quad[3]]);
    }

    #[test]
    fn test_split_covers_quad_area() {
        let size = 3.0;
        let appearances = FaceAppearanceMap::new();
        let mut mesh = Mesh::new();
        generate_cube_mesh(
            Vec3::ZERO,
            size,
            &appearances,
            DEFAULT_APPEARANCE,
            &mut mesh,
        );

        // Per face: two triangles covering exactly size^2
        for pair in mesh.triangles().chunks(2) {
            assert_eq!(triangle_area(&pair[0]) + triangle_area(&pair[1]), size * size);
        }
    }

    #[test]
    fn test_generate_full_cube() {
        let appearances = FaceAppearanceMap::new();
        let mut mesh = Mesh::new();
        generate_cube_mesh(Vec3::ZERO, 1.0, &appearances, DEFAULT_APPEARANCE, &mut mesh);

        assert_eq!(mesh.triangle_count(), 12);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_default_builder_buffer_counts() {
        let appearances = FaceAppearanceMap::new();
        let mut builder = DefaultMeshBuilder::new();
        generate_cube_mesh(
            Vec3::ZERO,
            1.0,
            &appearances,
            DEFAULT_APPEARANCE,
            &mut builder,
        );

        // 6 faces * 4 vertices = 24 vertices
        assert_eq!(builder.vertices.len(), 24 * 3);
        assert_eq!(builder.normals.len(), 24 * 3);
        assert_eq!(builder.colors.len(), 24 * 3);
        // 6 faces * 2 triangles * 3 indices = 36
        assert_eq!(builder.indices.len(), 36);
    }

    #[test]
    fn test_all_normals_unit_length() {
        let appearances = FaceAppearanceMap::new();
        let mut builder = DefaultMeshBuilder::new();
        generate_cube_mesh(
            Vec3::ZERO,
            2.0,
            &appearances,
            DEFAULT_APPEARANCE,
            &mut builder,
        );

        for i in 0..builder.normals.len() / 3 {
            let nx = builder.normals[i * 3];
            let ny = builder.normals[i * 3 + 1];
            let nz = builder.normals[i * 3 + 2];
            let length = (nx * nx + ny * ny + nz * nz).sqrt();
            assert!((length - 1.0).abs() < 0.001, "Normal not unit length");
        }
    }

    #[test]
    fn test_normals_consistent_per_face() {
        let appearances = FaceAppearanceMap::new();
        let mut builder = DefaultMeshBuilder::new();
        generate_cube_mesh(
            Vec3::ZERO,
            1.0,
            &appearances,
            DEFAULT_APPEARANCE,
            &mut builder,
        );

        // Each face has 4 vertices with identical normals
        for face_idx in 0..6 {
            let base = face_idx * 4;
            let n0 = [
                builder.normals[base * 3],
                builder.normals[base * 3 + 1],
                builder.normals[base * 3 + 2],
            ];

            for i in 1..4 {
                let ni = [
                    builder.normals[(base + i) * 3],
                    builder.normals[(base + i) * 3 + 1],
                    builder.normals[(base + i) * 3 + 2],
                ];
                assert_eq!(n0, ni, "Normals not consistent within face");
            }
        }
    }

    #[test]
    fn test_triangle_normal_matches_face_normal() {
        let appearances = FaceAppearanceMap::new();
        let mut mesh = Mesh::new();
        generate_cube_mesh(
            Vec3::new(-1.0, -1.0, -1.0),
            2.0,
            &appearances,
            DEFAULT_APPEARANCE,
            &mut mesh,
        );

        for (i, face) in Face::iter().enumerate() {
            for triangle in &mesh.triangles()[i * 2..i * 2 + 2] {
                assert_eq!(triangle.normal(), face.normal());
            }
        }
    }

    #[test]
    fn test_appearance_resolution_in_builder() {
        let red = by_id("red").unwrap();
        let mut appearances = FaceAppearanceMap::new();
        appearances.insert(Face::Front, red);

        let mut mesh = Mesh::new();
        generate_cube_mesh(Vec3::ZERO, 1.0, &appearances, DEFAULT_APPEARANCE, &mut mesh);

        let red_count = mesh
            .triangles()
            .iter()
            .filter(|t| t.appearance == red)
            .count();
        assert_eq!(red_count, 2);
    }

    #[test]
    fn test_to_mesh_data() {
        let appearances = FaceAppearanceMap::new();
        let mut mesh = Mesh::new();
        generate_cube_mesh(Vec3::ZERO, 1.0, &appearances, DEFAULT_APPEARANCE, &mut mesh);

        let data = mesh.to_mesh_data();
        // 12 triangles, 3 unshared vertices each
        assert_eq!(data.vertices.len(), 36 * 3);
        assert_eq!(data.normals.len(), 36 * 3);
        assert_eq!(data.colors.len(), 36 * 3);
        assert_eq!(data.indices.len(), 36);
        assert_eq!(data.indices, (0..36).collect::<Vec<u32>>());
    }
}
