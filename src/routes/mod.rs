//! src/routes/mod.rs

mod clients;
mod health_check;

pub use clients::*;
pub use health_check::*;
