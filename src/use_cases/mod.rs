// Use cases layer: rotor workflows driven by the host simulation.

pub mod controller;
pub mod host;
pub mod obstruction;
pub mod observer;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

pub use controller::{AttachOutcome, RotorController, SampleReport};
pub use host::rotor_task;
pub use observer::{AmbientSound, ObserverRotor};
pub use types::{InteractReply, RotorEvent, RotorSync};
