// Players interacting with a rotor.

use crate::domain::items::ItemStack;
use crate::domain::ports::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Survival,
    // Interactions never consume items.
    Creative,
}

/// User-facing, non-fatal feedback for a rejected interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub code: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub name: String,
    pub game_mode: GameMode,
    pub active_slot: Option<ItemStack>,
    pub notices: Vec<Notice>,
}

impl Player {
    pub fn new(name: impl Into<String>, game_mode: GameMode) -> Self {
        Self {
            name: name.into(),
            game_mode,
            active_slot: None,
            notices: Vec::new(),
        }
    }

    pub fn holding(mut self, stack: ItemStack) -> Self {
        self.active_slot = Some(stack);
        self
    }

    pub fn held_count(&self) -> u32 {
        self.active_slot.as_ref().map_or(0, |stack| stack.size)
    }
}

impl Actor for Player {
    fn active_slot(&mut self) -> &mut Option<ItemStack> {
        &mut self.active_slot
    }

    fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
