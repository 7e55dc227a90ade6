use serde::{Deserialize, Serialize};

/// Building silhouettes known to this version of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BuildingShape {
    Standard = 0,
    /// Tapering spire; the apex sits above the box top.
    Taper = 1,
    Pyramid = 2,
    WedgeX = 3,
    WedgeZ = 4,
    Cylinder = 5,
    Plane = 6,
    BulbousTier = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlantAxis {
    X,
    Z,
}

impl BuildingShape {
    pub const ALL: [BuildingShape; 8] = [
        BuildingShape::Standard,
        BuildingShape::Taper,
        BuildingShape::Pyramid,
        BuildingShape::WedgeX,
        BuildingShape::WedgeZ,
        BuildingShape::Cylinder,
        BuildingShape::Plane,
        BuildingShape::BulbousTier,
    ];

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub fn id(self) -> ShapeId {
        ShapeId(self as u8)
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildingShape::Standard => "standard",
            BuildingShape::Taper => "taper",
            BuildingShape::Pyramid => "pyramid",
            BuildingShape::WedgeX => "wedge-x",
            BuildingShape::WedgeZ => "wedge-z",
            BuildingShape::Cylinder => "cylinder",
            BuildingShape::Plane => "plane",
            BuildingShape::BulbousTier => "bulbous-tier",
        }
    }

    /// How far the geometry reaches above the base, as a multiple of the
    /// box height.
    pub fn height_multiplier(self) -> f32 {
        match self {
            BuildingShape::Taper => 1.5,
            BuildingShape::WedgeX | BuildingShape::WedgeZ => 0.75,
            BuildingShape::Pyramid
            | BuildingShape::Standard
            | BuildingShape::Cylinder
            | BuildingShape::Plane
            | BuildingShape::BulbousTier => 1.0,
        }
    }

    pub fn slant_axis(self) -> Option<SlantAxis> {
        match self {
            BuildingShape::WedgeX => Some(SlantAxis::X),
            BuildingShape::WedgeZ => Some(SlantAxis::Z),
            _ => None,
        }
    }
}

/// Shape identifier as stored on a primitive. Ids written by newer engine
/// versions may be unknown here; they resolve to [`BuildingShape::Standard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u8);

impl ShapeId {
    pub const STANDARD: ShapeId = ShapeId(0);

    pub fn resolve(self) -> BuildingShape {
        BuildingShape::from_id(self.0).unwrap_or(BuildingShape::Standard)
    }
}

impl From<BuildingShape> for ShapeId {
    fn from(shape: BuildingShape) -> Self {
        shape.id()
    }
}
