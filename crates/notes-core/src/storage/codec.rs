//! CSV codec for the note store.
//!
//! The file is a header row followed by one row per note. Values are written
//! as literal text and read back as plain strings; nothing is coerced. The
//! header is trusted on read: columns are matched by name, in whatever order
//! the file lists them.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::{NotesError, Result};
use crate::fs::write_atomic;
use crate::storage::types::{IdPolicy, Note};
use crate::store::NoteStore;

/// Canonical column order written to disk.
pub const HEADER: [&str; 7] = [
    "id",
    "created_at",
    "edited_at",
    "owner",
    "text",
    "due_date",
    "due_time",
];

/// Default file name, resolved against the working directory.
pub const DEFAULT_FILE_NAME: &str = "notes_db.csv";

/// A known column in the persisted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Id,
    CreatedAt,
    EditedAt,
    Owner,
    Text,
    DueDate,
    DueTime,
}

impl Column {
    /// Map a header name to a column, accepting the names older files used.
    fn from_header(name: &str) -> Option<Self> {
        match name.trim() {
            "id" => Some(Self::Id),
            "created_at" | "reg_date" => Some(Self::CreatedAt),
            "edited_at" | "edit_date" => Some(Self::EditedAt),
            "owner" | "user" => Some(Self::Owner),
            "text" | "note" => Some(Self::Text),
            "due_date" => Some(Self::DueDate),
            "due_time" => Some(Self::DueTime),
            _ => None,
        }
    }

    fn assign(self, note: &mut Note, value: &str) {
        let slot = match self {
            Self::Id => &mut note.id,
            Self::CreatedAt => &mut note.created_at,
            Self::EditedAt => &mut note.edited_at,
            Self::Owner => &mut note.owner,
            Self::Text => &mut note.text,
            Self::DueDate => &mut note.due_date,
            Self::DueTime => &mut note.due_time,
        };
        *slot = value.to_string();
    }
}

/// Write the store as CSV: header row, then one row per note in order.
///
/// An empty store produces a header-only file.
///
/// # Errors
///
/// Returns `NotesError::Serialization` if the writer fails.
pub fn serialize<W: Write>(store: &NoteStore, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER).map_err(serialization_error)?;
    for note in store.list() {
        csv_writer
            .write_record([
                &note.id,
                &note.created_at,
                &note.edited_at,
                &note.owner,
                &note.text,
                &note.due_date,
                &note.due_time,
            ])
            .map_err(serialization_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| NotesError::Serialization(e.to_string()))?;
    Ok(())
}

/// Read a store from CSV.
///
/// Each row is zipped positionally against the header. Short rows leave the
/// missing fields empty, extra cells and unknown columns are ignored. Input
/// without a header row yields an empty store.
///
/// # Errors
///
/// Returns `NotesError::Parse` if the input is not valid CSV text, or
/// `NotesError::Storage` if the reader fails.
pub fn deserialize<R: Read>(reader: R, id_policy: IdPolicy) -> Result<NoteStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns: Vec<Option<Column>> = headers.iter().map(Column::from_header).collect();
    for (name, column) in headers.iter().zip(&columns) {
        if column.is_none() {
            debug!("ignoring unknown column {:?}", name);
        }
    }

    let mut notes = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            warn!(
                "row {} has {} cells, header has {}; loading partial record",
                row + 2,
                record.len(),
                headers.len()
            );
        }

        let mut note = blank_note();
        for (column, value) in columns.iter().zip(record.iter()) {
            if let Some(column) = column {
                column.assign(&mut note, value);
            }
        }
        notes.push(note);
    }

    Ok(NoteStore::from_notes(notes, id_policy))
}

/// Load a store from a file. A missing file is an empty store, not an error.
pub fn load(path: &Path, id_policy: IdPolicy) -> Result<NoteStore> {
    if !path.exists() {
        debug!("{} does not exist; starting empty", path.display());
        return Ok(NoteStore::with_policy(id_policy));
    }
    let file = File::open(path)?;
    let store = deserialize(BufReader::new(file), id_policy)?;
    debug!("loaded {} notes from {}", store.len(), path.display());
    Ok(store)
}

/// Rewrite the whole file with the store's contents.
///
/// The data is written to a sibling temp file and renamed into place.
pub fn save(path: &Path, store: &NoteStore) -> Result<()> {
    let mut buffer = Vec::new();
    serialize(store, &mut buffer)?;
    write_atomic(path, &buffer)?;
    debug!("saved {} notes to {}", store.len(), path.display());
    Ok(())
}

fn serialization_error(err: csv::Error) -> NotesError {
    NotesError::Serialization(err.to_string())
}

fn blank_note() -> Note {
    Note {
        id: String::new(),
        created_at: String::new(),
        edited_at: String::new(),
        owner: String::new(),
        text: String::new(),
        due_date: String::new(),
        due_time: String::new(),
    }
}
