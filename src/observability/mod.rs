//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! HTTP requests additionally carry:
//!     → x-request-id (set and propagated by the http layer)
//!     → a tower-http trace span per request
//! ```

pub mod logging;

pub use logging::init_logging;
