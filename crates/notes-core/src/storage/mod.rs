//! Note data types and the CSV codec that persists them.

pub mod codec;
pub mod types;

pub use codec::{deserialize, load, save, serialize, DEFAULT_FILE_NAME, HEADER};
pub use types::{IdPolicy, NewNote, Note, NoteEdit, RemovedNote};
