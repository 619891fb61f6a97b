//! Pagelet DOM - the host-managed document tree
//!
//! An arena-backed node tree owned by the host and mutated by scripts
//! through opaque node handles.

mod error;
mod node;
mod query;
mod tree;

pub use error::{DomError, DomResult};
pub use node::{ElementData, Node, NodeId, NodeType};
pub use query::Queryable;
pub use tree::DomTree;
