pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use models::*;
