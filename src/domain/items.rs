// Item stacks held by players and dropped into the world.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub code: String,
    pub size: u32,
    // Durability and other per-stack data, ignored when matching item types.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl ItemStack {
    pub fn new(code: impl Into<String>, size: u32) -> Self {
        Self {
            code: code.into(),
            size,
            attributes: Map::new(),
        }
    }

    /// True when both stacks hold the same item type, ignoring attributes and size.
    pub fn same_item(&self, other: &ItemStack) -> bool {
        self.code == other.code
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes up to `amount` units and returns how many were taken.
    pub fn take_out(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.size);
        self.size -= taken;
        taken
    }
}
