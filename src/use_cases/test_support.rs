use crate::domain::geometry::BlockPos;
use crate::domain::items::ItemStack;
use crate::domain::ports::RandomSource;
use crate::domain::tuning::SAIL_ITEM_CODE;
use crate::domain::{GameMode, Player};

// Hub position shared by rotor unit tests.
pub(crate) const ORIGIN: BlockPos = BlockPos::new(0, 64, 0);

// Random source that always rolls the same value.
pub(crate) struct FixedRandom(pub(crate) f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

pub(crate) fn sail_stack(size: u32) -> ItemStack {
    ItemStack::new(SAIL_ITEM_CODE, size)
}

pub(crate) fn creative_player() -> Player {
    Player::new("builder", GameMode::Creative).holding(sail_stack(64))
}
