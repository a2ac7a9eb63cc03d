//! Cafe API — REST service for the cafe directory
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/   # configuration, state, server startup
//! ├── api/    # HTTP routes and handlers
//! ├── db/     # SQLite pool, models, repositories
//! └── utils/  # errors, envelopes, logging
//! ```
//!
//! The service exposes CRUD over a single `cafe` table: `/random`,
//! `/all`, `/search`, `/add`, `/update-price/{id}` and
//! `/report-closed/{id}` (gated by a configured api_key).

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger;
