use crate::face::Face;
use glam::Vec3;
use std::collections::HashMap;

/// Opaque handle to a rendering material
///
/// The mesh core never interprets the color payload; two appearances are
/// the same appearance exactly when they share a registry index.
#[derive(Debug, Clone, Copy)]
pub struct Appearance {
    pub index: u8,
    pub id: &'static str,
    pub color: Vec3,
}

impl PartialEq for Appearance {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Appearance {}

/// Per-face appearance assignment; faces absent from the map fall back to
/// the cube's default appearance
pub type FaceAppearanceMap = HashMap<Face, Appearance>;

pub const APPEARANCE_REGISTRY: [Appearance; 8] = [
    Appearance {
        index: 0,
        id: "black",
        color: Vec3::new(0.000, 0.000, 0.000),
    },
    Appearance {
        index: 1,
        id: "white",
        color: Vec3::new(1.000, 1.000, 1.000),
    },
    Appearance {
        index: 2,
        id: "yellow",
        color: Vec3::new(1.000, 0.843, 0.000),
    },
    Appearance {
        index: 3,
        id: "red",
        color: Vec3::new(0.718, 0.071, 0.204),
    },
    Appearance {
        index: 4,
        id: "orange",
        color: Vec3::new(1.000, 0.345, 0.000),
    },
    Appearance {
        index: 5,
        id: "blue",
        color: Vec3::new(0.000, 0.275, 0.678),
    },
    Appearance {
        index: 6,
        id: "green",
        color: Vec3::new(0.000, 0.608, 0.282),
    },
    Appearance {
        index: 7,
        id: "gray",
        color: Vec3::new(0.502, 0.502, 0.502),
    },
];

/// Appearance used for faces with no explicit assignment
pub const DEFAULT_APPEARANCE: Appearance = APPEARANCE_REGISTRY[0];

/// Look up a registry appearance by its id
pub fn by_id(id: &str) -> Option<Appearance> {
    APPEARANCE_REGISTRY.iter().find(|a| a.id == id).copied()
}
