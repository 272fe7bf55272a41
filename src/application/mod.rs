pub mod commands;
pub mod error;
pub mod ports;

pub use error::ApplicationResult;
