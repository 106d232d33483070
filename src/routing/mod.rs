//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     tree.rs (declarative RouteNode tree)
//!     → router.rs (flatten leaves, record layout chain)
//!     → Sort by specificity
//!     → Freeze as immutable Router
//!
//! Lookup:
//!     path
//!     → router.rs (route scan)
//!     → matcher.rs (segment match, bind params)
//!     → Return: RouteMatch or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always matches same route
//! - Most specific match wins; ties go to declaration order

pub mod matcher;
pub mod router;
pub mod tree;

pub use matcher::{PathMatch, PathPattern, PatternError};
pub use router::{CompiledRoute, RouteMatch, Router};
pub use tree::{build_route_tree, Component, ComponentKind, RouteNode};
