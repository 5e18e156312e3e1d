pub mod agent;
pub mod bnet;
pub mod config;
pub mod error;
pub mod robot;
pub mod server;

pub use error::{Error, Result};
