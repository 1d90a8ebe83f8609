pub mod snippets;
pub mod store;
pub mod autosave;
pub mod session;

pub use snippets::{pad_to_column, right_align, Snippet};
pub use store::{FileStore, MemoryStore, SnapshotStore, StoreError, StoreResult};
pub use autosave::{Autosaver, SaveStatus};
pub use session::{CursorPosition, Selection, Session};
