//! Event dispatch
//!
//! Per-node listener lists and the dispatch path the host drives when a
//! user interaction arrives. Handlers are fire-and-forget: each dispatch
//! runs every registered handler once, in registration order.

use rustc_hash::FxHashMap;

use pagelet_dom::NodeId;

use crate::dialog::Modal;

/// Interaction event kinds a script can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer click on a node
    Click,
}

/// Callback registered against a node's click events
///
/// Handlers receive the modal facility because that is the only host
/// capability a deferred callback may touch.
pub type ClickHandler = Box<dyn FnMut(&mut dyn Modal)>;

/// Listener registry keyed by target node
#[derive(Default)]
pub struct EventTargets {
    listeners: FxHashMap<(NodeId, EventKind), Vec<ClickHandler>>,
}

impl EventTargets {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an event on a node
    pub fn add(&mut self, target: NodeId, kind: EventKind, handler: ClickHandler) {
        self.listeners.entry((target, kind)).or_default().push(handler);
    }

    /// Dispatch an event to a node, returning the number of handlers run
    ///
    /// Events on nodes with no listeners are silently dropped.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind, modal: &mut dyn Modal) -> usize {
        let Some(handlers) = self.listeners.get_mut(&(target, kind)) else {
            log::debug!("No listeners for {:?} on {}", kind, target);
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(modal);
        }
        handlers.len()
    }
}
