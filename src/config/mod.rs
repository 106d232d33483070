//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (read keys, apply defaults)
//!     → validation.rs (required keys present and non-empty)
//!     → Settings (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; there are no setters
//! - The loader never exits the process; `main` decides what to do with errors
//! - Validation reports every missing key, in a fixed order

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, EnvSource, ProcessEnv};
pub use schema::{Environment, Settings};
