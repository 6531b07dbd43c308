pub mod automobile;
pub mod gpu;
pub mod monitor;

pub use automobile::*;
pub use gpu::*;
pub use monitor::*;
