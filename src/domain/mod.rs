// Domain layer: rotor types, tuning rules and collaborator ports.

pub mod actor;
pub mod errors;
pub mod geometry;
pub mod items;
pub mod physics;
pub mod ports;
pub mod state;
pub mod tuning;

pub use actor::{GameMode, Notice, Player};
pub use errors::StoreError;
pub use geometry::{BladeAxis, BlockPos, Cuboid, ShaftFacing, Vec3};
pub use items::ItemStack;
pub use physics::RotorPhysics;
pub use state::RotorSnapshot;
pub use tuning::{RotorTuning, WorldSettings};
