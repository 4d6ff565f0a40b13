use crate::domain::ports::{ShapeId, ShapeResolver};

const HUB_SHAPE: &str = "millwright:block/wood/mechanics/single/windmillrotor";
const SAIL_SHAPE_PREFIX: &str = "millwright:block/wood/mechanics/single/centered/windmill-";

// Maps a sail count onto the mod's block shape assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetShapeResolver;

impl ShapeResolver for AssetShapeResolver {
    fn resolve(&self, sail_count: u8, rotate_y: f32) -> ShapeId {
        let base = if sail_count == 0 {
            HUB_SHAPE.to_string()
        } else {
            format!("{SAIL_SHAPE_PREFIX}{sail_count}blade")
        };
        ShapeId { base, rotate_y }
    }
}
