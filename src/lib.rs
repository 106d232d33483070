//! Chat shell backend library.
//!
//! Two independent pieces live here: the environment-backed [`Settings`]
//! loader and the application's route table with its dispatcher.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{ConfigError, Settings};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{build_route_tree, Router};
