// Use-case level inputs/outputs for the rotor host loop.

use crate::domain::Player;
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum RotorEvent {
    // A player used the rotor; the (possibly drained) player is handed back.
    Interact {
        player: Player,
        reply: oneshot::Sender<InteractReply>,
    },
    // The owning block was broken. Replies with the number of dropped sail batches.
    Remove { reply: oneshot::Sender<u32> },
}

#[derive(Debug)]
pub struct InteractReply {
    pub attached: bool,
    pub player: Player,
}

/// State mirrored to observers after each change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorSync {
    pub sail_count: u8,
    pub wind_speed: f64,
}
