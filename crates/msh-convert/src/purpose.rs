//! Model purpose categories and chunk filters
//!
//! A MSH file holds models for very different purposes: render meshes,
//! collision hulls, hard points, skeleton bones and so on. Users can skip
//! whole categories through an ignore mask built from category names.

use log::warn;

bitflags::bitflags! {
    /// Purpose of a model record inside a MSH file
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModelPurpose: u16 {
        /// Regular render mesh
        const MESH_REGULAR = 0x1;
        /// Low resolution render mesh
        const MESH_LOWREZ = 0x2;
        /// Soldier/ordnance collision mesh
        const MESH_COLLISION = 0x4;
        /// Vehicle collision mesh
        const MESH_VEHICLE_COLLISION = 0x8;
        /// Shadow volume mesh
        const MESH_SHADOW_VOLUME = 0x10;
        /// Terrain cutter mesh
        const MESH_TERRAIN_CUT = 0x20;
        /// Empty transform node
        const POINT_EMPTY_TRANSFORM = 0x40;
        /// Dummy root node
        const POINT_DUMMY_ROOT = 0x80;
        /// Hard point (attachment) node
        const POINT_HARD_POINT = 0x100;
        /// Skeleton root
        const SKELETON_ROOT = 0x200;
        /// First bone of a chain
        const SKELETON_BONE_ROOT = 0x400;
        /// Bone in the middle of a chain
        const SKELETON_BONE_LIMB = 0x800;
        /// Last bone of a chain
        const SKELETON_BONE_END = 0x1000;

        /// Every mesh category
        const MESH = Self::MESH_REGULAR.bits()
            | Self::MESH_LOWREZ.bits()
            | Self::MESH_COLLISION.bits()
            | Self::MESH_VEHICLE_COLLISION.bits()
            | Self::MESH_SHADOW_VOLUME.bits()
            | Self::MESH_TERRAIN_CUT.bits();
        /// Every point category
        const POINT = Self::POINT_EMPTY_TRANSFORM.bits()
            | Self::POINT_DUMMY_ROOT.bits()
            | Self::POINT_HARD_POINT.bits();
        /// Every skeleton category
        const SKELETON = Self::SKELETON_ROOT.bits()
            | Self::SKELETON_BONE_ROOT.bits()
            | Self::SKELETON_BONE_LIMB.bits()
            | Self::SKELETON_BONE_END.bits();
    }
}

impl ModelPurpose {
    /// Category names accepted on the command line
    pub const NAMES: &'static [(&'static str, Self)] = &[
        // Meshes
        ("Mesh", Self::MESH),
        ("Mesh_Regular", Self::MESH_REGULAR),
        ("Mesh_Lowrez", Self::MESH_LOWREZ),
        ("Mesh_Collision", Self::MESH_COLLISION),
        ("Mesh_VehicleCollision", Self::MESH_VEHICLE_COLLISION),
        ("Mesh_ShadowVolume", Self::MESH_SHADOW_VOLUME),
        ("Mesh_TerrainCut", Self::MESH_TERRAIN_CUT),
        // Just points
        ("Point", Self::POINT),
        ("Point_EmptyTransform", Self::POINT_EMPTY_TRANSFORM),
        ("Point_DummyRoot", Self::POINT_DUMMY_ROOT),
        ("Point_HardPoint", Self::POINT_HARD_POINT),
        // Skeleton
        ("Skeleton", Self::SKELETON),
        ("Skeleton_Root", Self::SKELETON_ROOT),
        ("Skeleton_BoneRoot", Self::SKELETON_BONE_ROOT),
        ("Skeleton_BoneLimb", Self::SKELETON_BONE_LIMB),
        ("Skeleton_BoneEnd", Self::SKELETON_BONE_END),
    ];

    /// Look up a category by its command line name (case-sensitive).
    ///
    /// Not to be confused with the generated `from_name`, which matches the
    /// constant names such as `MESH_COLLISION`.
    pub fn from_category(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, purpose)| *purpose)
    }
}

/// Build the ignore mask from category names, logging a warning for every
/// name that is not a known category.
pub fn ignore_mask<I, S>(names: I) -> ModelPurpose
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (mask, unknown) = parse_ignore_names(names);
    for name in &unknown {
        warn!("'{name}' is not a valid filter option!");
    }
    mask
}

/// Split category names into the combined mask and the unknown names
pub fn parse_ignore_names<I, S>(names: I) -> (ModelPurpose, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mask = ModelPurpose::empty();
    let mut unknown = Vec::new();

    for name in names {
        let name = name.as_ref();
        match ModelPurpose::from_category(name) {
            Some(purpose) => mask |= purpose,
            None => unknown.push(name.to_string()),
        }
    }

    (mask, unknown)
}

/// Which chunks of a MSH file the exporter should honor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkFilter {
    /// Honor models and animations
    #[default]
    None,
    /// Honor model data, skip animation chunks
    ModelsOnly,
    /// Honor animation data, skip model chunks
    AnimationsOnly,
}

impl ChunkFilter {
    /// Whether animation data survives this filter
    pub fn carries_animations(self) -> bool {
        !matches!(self, Self::ModelsOnly)
    }
}
