//! docmatch server - HTTP REST API for document matching
//!
//! Wraps a [`docmatch::MatchOrchestrator`] in an axum router. Uploads arrive
//! as `multipart/form-data`, are matched on the blocking thread pool, and come
//! back as JSON.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with template status
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/match` - Match the uploaded `file` field
//!
//! Missing uploads and unsupported formats answer 400; any other match
//! failure answers 500. Errors share one body shape:
//!
//! ```json
//! { "error": { "code": "UNSUPPORTED_FORMAT", "message": "unsupported file format: .xyz" } }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
