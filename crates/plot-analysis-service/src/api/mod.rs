//! REST API

pub mod handlers;
pub mod router;
pub mod state;

pub use router::{cors_layer, create_router};
pub use state::AppState;
