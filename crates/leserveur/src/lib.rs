#![warn(missing_docs)]

//! leserveur - HTTP server and CLI for LeSeo.
//!
//! *Le Serveur* (The Server) - Axum-based HTTP server exposing the scoring
//! and sitemap engines, plus a clap CLI for one-shot use of the same
//! operations.

/// Command-line interface definition.
pub mod cli;
/// Server configuration from environment variables.
pub mod config;
/// API error types.
pub mod error;
/// HTTP handlers for the REST endpoints.
pub mod handlers;
/// API response types matching the wire contract.
pub mod responses;
/// Server instance management.
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::LeSeoServer;
