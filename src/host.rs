//! Host node tree the rotator mounts into.
//!
//! This module plays the role a document tree plays for a browser widget: it
//! owns attribute storage, child text nodes, and the per-node presentation
//! state the animator mutates. Both [`Container`] and [`NodeHandle`] are
//! cheap-clone handles over shared state, so the caller, the rotator, its
//! timer task, and in-flight animation tasks can all hold references at once,
//! the same aliasing a real DOM reference allows.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// How a node participates in layout during a transition.
///
/// An `Absolute` node is lifted out of normal flow so the outgoing and
/// incoming entries can occupy the same spot while both are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Flow,
    Absolute,
}

/// Presentation state the animator drives: opacity plus a vertical offset
/// in pixels (positive = below the resting position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub offset: f32,
}

impl VisualState {
    /// Fully opaque, at rest
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
        }
    }

    /// Fully transparent, at rest
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            offset: 0.0,
        }
    }
}

#[derive(Debug)]
struct NodeState {
    text: String,
    current: bool,
    layout: LayoutMode,
    visual: VisualState,
}

/// Shared handle to one rendered text node.
#[derive(Debug, Clone)]
pub struct NodeHandle {
    state: Arc<Mutex<NodeState>>,
}

impl NodeHandle {
    fn new(text: impl Into<String>, current: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(NodeState {
                text: text.into(),
                current,
                layout: LayoutMode::Flow,
                visual: if current {
                    VisualState::visible()
                } else {
                    VisualState::hidden()
                },
            })),
        }
    }

    /// The node's text content
    pub fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    /// Whether this node carries the "current" visibility marker
    pub fn is_current(&self) -> bool {
        self.state.lock().current
    }

    /// Set or clear the "current" visibility marker
    pub fn set_current(&self, current: bool) {
        self.state.lock().current = current;
    }

    pub fn layout(&self) -> LayoutMode {
        self.state.lock().layout
    }

    pub fn set_layout(&self, layout: LayoutMode) {
        self.state.lock().layout = layout;
    }

    pub fn visual(&self) -> VisualState {
        self.state.lock().visual
    }

    pub fn set_visual(&self, visual: VisualState) {
        self.state.lock().visual = visual;
    }

    /// Whether two handles reference the same underlying node
    pub fn same_node(&self, other: &NodeHandle) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Point-in-time copy for rendering
    pub fn view(&self) -> NodeView {
        let state = self.state.lock();
        NodeView {
            text: state.text.clone(),
            current: state.current,
            layout: state.layout,
            visual: state.visual,
        }
    }
}

/// Container content: either plain static text or a list of rendered nodes.
#[derive(Debug)]
enum Content {
    Text(String),
    Nodes(Vec<NodeHandle>),
}

#[derive(Debug)]
struct ContainerState {
    attributes: HashMap<String, String>,
    content: Content,
}

/// Shared handle to the container element the rotator mounts into.
///
/// The container is owned by the caller; the rotator only ever holds a clone
/// of the handle.
#[derive(Debug, Clone)]
pub struct Container {
    state: Arc<Mutex<ContainerState>>,
}

impl Container {
    /// Create an empty container with no attributes
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ContainerState {
                attributes: HashMap::new(),
                content: Content::Text(String::new()),
            })),
        }
    }

    /// Create a container carrying a single attribute
    pub fn with_attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        let container = Self::new();
        container.set_attribute(name, value);
        container
    }

    /// Read an attribute value, if present
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.lock().attributes.get(name).cloned()
    }

    /// Set an attribute value
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.state
            .lock()
            .attributes
            .insert(name.into(), value.into());
    }

    /// Remove all existing content, leaving an empty node list
    pub fn clear(&self) {
        self.state.lock().content = Content::Nodes(Vec::new());
    }

    /// Create a text node, append it, and return its handle.
    ///
    /// Replaces any plain-text content with a node list first.
    pub fn append_text_node(&self, text: impl Into<String>, current: bool) -> NodeHandle {
        let node = NodeHandle::new(text, current);
        let mut state = self.state.lock();
        if let Content::Nodes(nodes) = &mut state.content {
            nodes.push(node.clone());
        } else {
            state.content = Content::Nodes(vec![node.clone()]);
        }
        node
    }

    /// Collapse the container to plain static text, dropping all nodes
    pub fn set_text(&self, text: impl Into<String>) {
        self.state.lock().content = Content::Text(text.into());
    }

    /// Handles of the current child nodes (empty when in plain-text mode)
    pub fn nodes(&self) -> Vec<NodeHandle> {
        match &self.state.lock().content {
            Content::Nodes(nodes) => nodes.clone(),
            Content::Text(_) => Vec::new(),
        }
    }

    /// Plain text content, if the container is in static-text mode
    pub fn text(&self) -> Option<String> {
        match &self.state.lock().content {
            Content::Text(text) => Some(text.clone()),
            Content::Nodes(_) => None,
        }
    }

    /// Point-in-time copy of the whole container for rendering
    pub fn view(&self) -> ContainerView {
        let state = self.state.lock();
        let content = match &state.content {
            Content::Text(text) => ContentView::Text(text.clone()),
            Content::Nodes(nodes) => {
                ContentView::Nodes(nodes.iter().map(NodeHandle::view).collect())
            }
        };
        ContainerView { content }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of a container, safe to hand to a renderer without holding locks.
#[derive(Debug, Clone)]
pub struct ContainerView {
    pub content: ContentView,
}

/// Snapshot of container content.
#[derive(Debug, Clone)]
pub enum ContentView {
    Text(String),
    Nodes(Vec<NodeView>),
}

/// Snapshot of a single node.
#[derive(Debug, Clone)]
pub struct NodeView {
    pub text: String,
    pub current: bool,
    pub layout: LayoutMode,
    pub visual: VisualState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_read_write() {
        let container = Container::with_attribute("data-scroll-text", "a|b|c");
        assert_eq!(
            container.attribute("data-scroll-text").as_deref(),
            Some("a|b|c")
        );
        assert_eq!(container.attribute("data-other"), None);

        container.set_attribute("data-other", "x");
        assert_eq!(container.attribute("data-other").as_deref(), Some("x"));
    }

    #[test]
    fn test_append_nodes_after_clear() {
        let container = Container::new();
        container.clear();
        let first = container.append_text_node("hello", true);
        let second = container.append_text_node("world", false);

        let nodes = container.nodes();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].same_node(&first));
        assert!(nodes[1].same_node(&second));

        assert!(first.is_current());
        assert_eq!(first.visual(), VisualState::visible());
        assert!(!second.is_current());
        assert_eq!(second.visual(), VisualState::hidden());
    }

    #[test]
    fn test_set_text_collapses_nodes() {
        let container = Container::new();
        container.clear();
        container.append_text_node("hello", true);
        container.append_text_node("world", false);

        container.set_text("hello");
        assert_eq!(container.text().as_deref(), Some("hello"));
        assert!(container.nodes().is_empty());
    }

    #[test]
    fn test_node_state_mutation() {
        let container = Container::new();
        container.clear();
        let node = container.append_text_node("hello", false);

        node.set_current(true);
        node.set_layout(LayoutMode::Absolute);
        node.set_visual(VisualState {
            opacity: 0.5,
            offset: -10.0,
        });

        assert!(node.is_current());
        assert_eq!(node.layout(), LayoutMode::Absolute);
        assert_eq!(node.visual().opacity, 0.5);
        assert_eq!(node.visual().offset, -10.0);
    }

    #[test]
    fn test_view_snapshot_reflects_state() {
        let container = Container::new();
        container.clear();
        let node = container.append_text_node("hello", true);
        node.set_visual(VisualState {
            opacity: 0.25,
            offset: 5.0,
        });

        match container.view().content {
            ContentView::Nodes(nodes) => {
                assert_eq!(nodes.len(), 1);
                assert_eq!(nodes[0].text, "hello");
                assert!(nodes[0].current);
                assert_eq!(nodes[0].visual.opacity, 0.25);
            }
            ContentView::Text(_) => panic!("expected node content"),
        }

        container.set_text("done");
        match container.view().content {
            ContentView::Text(text) => assert_eq!(text, "done"),
            ContentView::Nodes(_) => panic!("expected text content"),
        }
    }
}
