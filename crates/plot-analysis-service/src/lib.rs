//! Plot analysis REST service
//!
//! This crate provides the HTTP surface for the mock plot analyzer:
//! - REST handlers and CORS policy
//! - Layered configuration
//! - Server lifecycle management

#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use crate::api::{create_router, AppState};
pub use crate::config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use server::Server;
