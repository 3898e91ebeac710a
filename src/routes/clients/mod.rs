//! src/routes/clients/mod.rs

mod get;
mod post;
mod welcome_email;

pub use get::*;
pub use post::*;
pub use welcome_email::*;
