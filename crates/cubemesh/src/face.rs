use glam::Vec3;

/// Face direction for cube faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front, // +Z
    Right, // +X
    Back,  // -Z
    Left,  // -X
    Up,    // +Y
    Down,  // -Y
}

impl Face {
    /// All six faces in a fixed enumeration order
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Up,
        Face::Down,
    ];

    /// Get the outward normal vector for this face
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Front => Vec3::new(0.0, 0.0, 1.0),
            Face::Right => Vec3::new(1.0, 0.0, 0.0),
            Face::Back => Vec3::new(0.0, 0.0, -1.0),
            Face::Left => Vec3::new(-1.0, 0.0, 0.0),
            Face::Up => Vec3::new(0.0, 1.0, 0.0),
            Face::Down => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Get the four corners of this face in counter-clockwise order when
    /// viewed from outside the cube
    ///
    /// `origin` is the minimum corner of the cube and `size` its edge
    /// length. Each corner offsets one or more components of `origin` by
    /// `size`; the winding encodes the outward facing for the triangles
    /// derived from it.
    #[inline]
    pub fn vertices(self, origin: Vec3, size: f32) -> [Vec3; 4] {
        let Vec3 { x, y, z } = origin;
        match self {
            Face::Front => [
                Vec3::new(x, y + size, z + size),
                Vec3::new(x, y, z + size),
                Vec3::new(x + size, y, z + size),
                Vec3::new(x + size, y + size, z + size),
            ],
            Face::Right => [
                Vec3::new(x + size, y + size, z + size),
                Vec3::new(x + size, y, z + size),
                Vec3::new(x + size, y, z),
                Vec3::new(x + size, y + size, z),
            ],
            Face::Back => [
                Vec3::new(x + size, y + size, z),
                Vec3::new(x + size, y, z),
                Vec3::new(x, y, z),
                Vec3::new(x, y + size, z),
            ],
            Face::Left => [
                Vec3::new(x, y + size, z),
                Vec3::new(x, y, z),
                Vec3::new(x, y, z + size),
                Vec3::new(x, y + size, z + size),
            ],
            Face::Up => [
                Vec3::new(x, y + size, z),
                Vec3::new(x, y + size, z + size),
                Vec3::new(x + size, y + size, z + size),
                Vec3::new(x + size, y + size, z),
            ],
            Face::Down => [
                Vec3::new(x, y, z),
                Vec3::new(x + size, y, z),
                Vec3::new(x + size, y, z + size),
                Vec3::new(x, y, z + size),
            ],
        }
    }

    /// Iterator over all faces
    #[inline]
    pub fn iter() -> impl Iterator<Item = Face> {
        Self::ALL.iter().copied()
    }
}
