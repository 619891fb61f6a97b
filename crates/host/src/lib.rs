//! Pagelet host environment
//!
//! The platform capabilities a page script runs against: a console for
//! diagnostic output, a modal facility for alerts, click-event dispatch,
//! and the `Page` surface tying them to a document tree.

mod console;
mod dialog;
mod error;
mod event;
mod page;

pub use console::{Console, RecordingConsole, StdConsole};
pub use dialog::{Modal, RecordingModal, StdModal};
pub use error::{HostError, HostResult};
pub use event::{ClickHandler, EventKind, EventTargets};
pub use page::Page;
