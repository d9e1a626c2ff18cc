//! HTTP server for Arca.
//!
//! A thin request shell over `arca-dispatch`: raw-byte upload and check
//! endpoints, JSON classification endpoints, and liveness probes. All
//! domain decisions (dedup, idempotence, error taxonomy) live below this
//! layer; handlers only translate between HTTP and dispatch outcomes.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::ArcaServer;
pub use state::AppState;
