pub mod config;
pub mod error;
pub mod model;

pub use config::{AlertPolicy, Config};
pub use error::*;
pub use model::*;
