//! Page: the capability surface scripts consume
//!
//! Owns the document tree and the listener registry, and exposes the
//! handful of operations a script may perform on them: lookup, text and
//! style mutation, element creation, appending, and click subscription.

use pagelet_dom::{DomTree, NodeId, Queryable};

use crate::dialog::Modal;
use crate::error::HostResult;
use crate::event::{ClickHandler, EventKind, EventTargets};

/// A loaded page: document tree plus event listeners
pub struct Page {
    tree: DomTree,
    targets: EventTargets,
}

impl Page {
    /// Create a page around an existing tree
    pub fn new(tree: DomTree) -> Self {
        Self {
            tree,
            targets: EventTargets::new(),
        }
    }

    /// Look up an element by its ID attribute
    ///
    /// Returns `None` on a miss; the script decides whether that is fatal.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.tree.element_by_id(id)
    }

    /// Replace a node's content with a single text child
    pub fn set_text(&mut self, node: NodeId, text: &str) -> HostResult<()> {
        self.tree.set_text_content(node, text)?;
        Ok(())
    }

    /// Set an inline style property on an element
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> HostResult<()> {
        self.tree.set_style(node, property, value)?;
        Ok(())
    }

    /// Create a new detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Append a node as the last child of a parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> HostResult<()> {
        self.tree.append_child(parent, child)?;
        Ok(())
    }

    /// Register a click handler on a node
    pub fn on_click(&mut self, node: NodeId, handler: ClickHandler) {
        self.targets.add(node, EventKind::Click, handler);
    }

    /// Inject a click on a node, returning the number of handlers run
    ///
    /// This is the host side of event dispatch; in a real user agent it
    /// is driven by the windowing event loop.
    pub fn click(&mut self, node: NodeId, modal: &mut dyn Modal) -> usize {
        self.targets.dispatch(node, EventKind::Click, modal)
    }

    /// The underlying document tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Concatenated text content of a node's subtree
    pub fn text_of(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    /// Inline style property of an element, if set
    pub fn style_of(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree
            .get(node)
            .and_then(|n| n.as_element())
            .and_then(|e| e.style(property))
            .map(|s| s.to_string())
    }
}
