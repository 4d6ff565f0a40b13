// Interface adapters: concrete world, storage, network and sync wiring.

pub mod network;
pub mod protocol;
pub mod shapes;
pub mod store;
pub mod utils;
pub mod world;
