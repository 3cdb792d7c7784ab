//! API request handlers

mod analysis;
mod health;

pub use analysis::*;
pub use health::*;
