//! Declarative route tree.
//!
//! A node is either a layout shell (no path, renders its children) or a
//! page (path pattern, renders one component). The tree is built once at
//! startup and compiled into a [`Router`](crate::routing::Router).

use crate::routing::matcher::PathPattern;

/// Whether a component is a layout shell or a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Layout,
    Page,
}

/// Frontend components referenced by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    RootLayout,
    DashboardLayout,
    Homepage,
    SignInPage,
    SignUpPage,
    DashboardPage,
    ChatPage,
}

impl Component {
    pub fn name(&self) -> &'static str {
        match self {
            Component::RootLayout => "RootLayout",
            Component::DashboardLayout => "DashboardLayout",
            Component::Homepage => "Homepage",
            Component::SignInPage => "SignInPage",
            Component::SignUpPage => "SignUpPage",
            Component::DashboardPage => "DashboardPage",
            Component::ChatPage => "ChatPage",
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::RootLayout | Component::DashboardLayout => ComponentKind::Layout,
            _ => ComponentKind::Page,
        }
    }
}

/// A node in the route tree.
#[derive(Debug, Clone)]
pub struct RouteNode<H> {
    pub path: Option<PathPattern>,
    pub handler: H,
    pub children: Vec<RouteNode<H>>,
}

impl<H> RouteNode<H> {
    /// A layout node wrapping `children`.
    pub fn layout(handler: H, children: Vec<RouteNode<H>>) -> Self {
        Self {
            path: None,
            handler,
            children,
        }
    }

    /// A leaf page node.
    pub fn page(path: PathPattern, handler: H) -> Self {
        Self {
            path: Some(path),
            handler,
            children: Vec::new(),
        }
    }

    pub fn is_layout(&self) -> bool {
        self.path.is_none()
    }
}

fn pattern(raw: &'static str) -> PathPattern {
    PathPattern::parse(raw).expect("built-in route pattern is valid")
}

/// Build the application's route tree.
pub fn build_route_tree() -> RouteNode<Component> {
    RouteNode::layout(
        Component::RootLayout,
        vec![
            RouteNode::page(pattern("/"), Component::Homepage),
            RouteNode::page(pattern("/sign-in/*"), Component::SignInPage),
            RouteNode::page(pattern("/sign-up/*"), Component::SignUpPage),
            RouteNode::layout(
                Component::DashboardLayout,
                vec![
                    RouteNode::page(pattern("/dashboard"), Component::DashboardPage),
                    RouteNode::page(pattern("/dashboard/chats/:id"), Component::ChatPage),
                ],
            ),
        ],
    )
}
