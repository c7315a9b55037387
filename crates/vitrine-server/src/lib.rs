//! HTTP API for the vitrine site builder.
//!
//! Exposes project CRUD, the image-generation stub, zip export and
//! publish-to-disk preview over axum, with permissive CORS for the editor
//! frontend.

pub mod error;
pub mod images;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{ApiServer, AppState, ServerConfig, ServerError};
