//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Flatten the route tree into leaf routes with their layout chain
//! - Look up the matching route for a path
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Routes sorted by specificity once, at compile time
//! - O(n) scan over routes (acceptable for typical route counts)
//! - Explicit `None` rather than a silent default route

use crate::routing::matcher::{PathMatch, PathPattern};
use crate::routing::tree::RouteNode;

/// A leaf route with everything needed to render it.
#[derive(Debug, Clone)]
pub struct CompiledRoute<H> {
    pattern: PathPattern,
    layouts: Vec<H>,
    handler: H,
}

impl<H> CompiledRoute<H> {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Enclosing layouts, outermost first.
    pub fn layouts(&self) -> &[H] {
        &self.layouts
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

/// A successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    route: &'a CompiledRoute<H>,
    matched: PathMatch,
}

impl<'a, H> RouteMatch<'a, H> {
    pub fn route(&self) -> &'a CompiledRoute<H> {
        self.route
    }

    pub fn handler(&self) -> &'a H {
        &self.route.handler
    }

    pub fn layouts(&self) -> &'a [H] {
        &self.route.layouts
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.matched.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.matched.param(name)
    }

    /// Sub-path left for a wildcard route's own routing.
    pub fn rest(&self) -> Option<&str> {
        self.matched.rest.as_deref()
    }
}

/// Compiled, immutable route table.
#[derive(Debug, Clone)]
pub struct Router<H> {
    routes: Vec<CompiledRoute<H>>,
}

impl<H: Clone> Router<H> {
    /// Compile a route tree into a dispatch table.
    pub fn compile(tree: &RouteNode<H>) -> Self {
        let mut routes = Vec::new();
        let mut layouts = Vec::new();
        collect(tree, &mut layouts, &mut routes);

        // Stable sort: equal scores keep declaration order.
        routes.sort_by_key(|r: &CompiledRoute<H>| std::cmp::Reverse(r.pattern.specificity()));

        tracing::debug!(routes = routes.len(), "Route table compiled");
        Self { routes }
    }
}

impl<H> Router<H> {
    /// Find the single best route for `path`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(path)
                .map(|matched| RouteMatch { route, matched })
        })
    }

    /// All routes in dispatch order.
    pub fn routes(&self) -> &[CompiledRoute<H>] {
        &self.routes
    }
}

fn collect<H: Clone>(node: &RouteNode<H>, layouts: &mut Vec<H>, out: &mut Vec<CompiledRoute<H>>) {
    match &node.path {
        Some(pattern) => {
            out.push(CompiledRoute {
                pattern: pattern.clone(),
                layouts: layouts.clone(),
                handler: node.handler.clone(),
            });
            // A page with children also wraps them.
            if !node.children.is_empty() {
                layouts.push(node.handler.clone());
                for child in &node.children {
                    collect(child, layouts, out);
                }
                layouts.pop();
            }
        }
        None => {
            layouts.push(node.handler.clone());
            for child in &node.children {
                collect(child, layouts, out);
            }
            layouts.pop();
        }
    }
}
