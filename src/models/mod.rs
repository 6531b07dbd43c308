pub mod automobile_kind;
pub mod config;
pub mod hardware;

pub use automobile_kind::*;
pub use config::*;
pub use hardware::*;
