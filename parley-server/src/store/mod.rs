mod memory;
mod room_store;

pub use memory::*;
pub use room_store::*;
