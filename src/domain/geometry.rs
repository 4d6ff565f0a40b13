// Block-grid coordinates and rotor orientation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer position of a block in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    // Wraps at the i32 edges so scans around any hub stay panic-free.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
        }
    }

    /// World-space center of the block.
    pub fn center(self) -> Vec3 {
        Vec3 {
            x: f64::from(self.x) + 0.5,
            y: f64::from(self.y) + 0.5,
            z: f64::from(self.z) + 0.5,
        }
    }
}

// "x,y,z" is also the key format used by the JSON state store.
impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for BlockPos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(|part| part.trim().parse::<i32>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Self::new(x, y, z)),
            _ => Err(format!("invalid block position: {s:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Axis-aligned collision box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub min: Vec3,
    pub max: Vec3,
}

impl Cuboid {
    /// Box covering `height` (0..=1) of the block at `pos`, from its floor up.
    pub fn block_slab(pos: BlockPos, height: f64) -> Self {
        let (x, y, z) = (f64::from(pos.x), f64::from(pos.y), f64::from(pos.z));
        Self {
            min: Vec3 { x, y, z },
            max: Vec3 {
                x: x + 1.0,
                y: y + height,
                z: z + 1.0,
            },
        }
    }

    pub fn full_block(pos: BlockPos) -> Self {
        Self::block_slab(pos, 1.0)
    }
}

/// Horizontal direction the rotor shaft points to, fixed at placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShaftFacing {
    North,
    East,
    South,
    West,
}

/// Horizontal axis spanned by the blade plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BladeAxis {
    X,
    Z,
}

impl BladeAxis {
    // Blades sweep the vertical plane perpendicular to the shaft.
    pub fn from_shaft(facing: ShaftFacing) -> Self {
        match facing {
            ShaftFacing::North | ShaftFacing::South => BladeAxis::X,
            ShaftFacing::East | ShaftFacing::West => BladeAxis::Z,
        }
    }

    /// Maps an in-plane horizontal offset onto world `(dx, dz)`.
    pub fn horizontal(self, dxz: i32) -> (i32, i32) {
        match self {
            BladeAxis::X => (dxz, 0),
            BladeAxis::Z => (0, dxz),
        }
    }
}
