//! DOM query functionality (lookup by identifier or tag name)

use crate::node::NodeId;
use crate::tree::DomTree;

/// Trait for querying the document tree
///
/// A lookup miss is reported as `None`; whether that is fatal is the
/// caller's decision.
pub trait Queryable {
    /// Find an element by its ID attribute
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Find elements by tag name, in document order
    fn elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId>;
}

impl Queryable for DomTree {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.document_id())
            .into_iter()
            .find(|&node_id| {
                self.get(node_id)
                    .and_then(|n| n.as_element())
                    .map(|e| e.id() == Some(id))
                    .unwrap_or(false)
            })
    }

    fn elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        let tag_lower = tag_name.to_ascii_lowercase();
        self.descendants(self.document_id())
            .into_iter()
            .filter(|&node_id| {
                self.get(node_id)
                    .and_then(|n| n.as_element())
                    .map(|e| e.tag_name == tag_lower)
                    .unwrap_or(false)
            })
            .collect()
    }
}
