pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod plot;

pub use error::{Error, Result};
