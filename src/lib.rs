pub mod config;
pub mod error;
pub mod fleet;
pub mod models;
pub mod render;
pub mod shell;

pub use error::RentalError;
pub use fleet::Fleet;
