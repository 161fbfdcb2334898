/// Recipe Service Library
///
/// A read-only HTTP API over a MongoDB recipe collection. The collection is
/// replaced from a bundled JSON fixture once at startup; after that every
/// endpoint is a single query or aggregation round trip.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and query-parameter validation
/// - `models`: Recipe and ingredient document types
/// - `db`: Database access layer and the recipe repository
/// - `seed`: One-shot fixture import run before the server binds
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `openapi`: OpenAPI documentation served at `/docs`
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod seed;

pub use config::Config;
pub use error::{AppError, Result};
