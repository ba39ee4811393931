use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use notes_core::storage::{load, save, DEFAULT_FILE_NAME};
use notes_core::{IdPolicy, NewNote, NoteEdit, NoteStore};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.csv", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn three_note_store() -> NoteStore {
    let mut store = NoteStore::new();
    store.add(
        NewNote::new("Buy milk")
            .due("2024-01-01", "09:00")
            .owner("alice")
            .created_at("2024-01-01 08:00:00"),
    );
    store.add(
        NewNote::new("Pay rent, water, power")
            .due("2024-01-05", "12:00")
            .owner("alice")
            .created_at("2024-01-01 08:05:00"),
    );
    store.add(
        NewNote::new("Say \"hi\"\nto the neighbours")
            .due("2024-02-01", "")
            .owner("bob")
            .created_at("2024-01-02 19:30:00"),
    );
    store
        .edit_at(2, NoteEdit::new("Pay rent, water, power, gas"), "2024-01-03 07:00:00")
        .expect("edit should succeed");
    store
}

#[test]
fn test_save_load_round_trip() {
    let temp = TempFile::new("notes_round_trip");
    let store = three_note_store();
    assert_eq!(store.list()[0].edited_at, "");

    save(&temp.path, &store).expect("save should succeed");
    let loaded = load(&temp.path, IdPolicy::Positional).expect("load should succeed");

    assert_eq!(loaded, store);
    for (original, reloaded) in store.list().iter().zip(loaded.list()) {
        assert_eq!(original.id, reloaded.id);
        assert_eq!(original.created_at, reloaded.created_at);
        assert_eq!(original.edited_at, reloaded.edited_at);
        assert_eq!(original.owner, reloaded.owner);
        assert_eq!(original.text, reloaded.text);
        assert_eq!(original.due_date, reloaded.due_date);
        assert_eq!(original.due_time, reloaded.due_time);
    }
}

#[test]
fn test_load_missing_file_is_empty_store() {
    let temp = TempFile::new("notes_missing");
    assert!(!temp.path.exists());

    let store = load(&temp.path, IdPolicy::Positional).expect("load should succeed");
    assert!(store.is_empty());
}

#[test]
fn test_save_empty_store_writes_header_only() {
    let temp = TempFile::new("notes_empty");

    save(&temp.path, &NoteStore::new()).expect("save should succeed");

    let on_disk = fs::read_to_string(&temp.path).expect("read should succeed");
    assert_eq!(on_disk, "id,created_at,edited_at,owner,text,due_date,due_time\n");
    let loaded = load(&temp.path, IdPolicy::Positional).expect("load should succeed");
    assert!(loaded.is_empty());
}

#[test]
fn test_save_overwrites_previous_contents() {
    let temp = TempFile::new("notes_overwrite");
    let mut store = three_note_store();
    save(&temp.path, &store).expect("first save should succeed");

    store.remove_at(1, "2024-01-04 00:00:00").expect("remove should succeed");
    save(&temp.path, &store).expect("second save should succeed");

    let loaded = load(&temp.path, IdPolicy::Positional).expect("load should succeed");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.list()[0].id, "2");
}

#[test]
fn test_load_file_written_by_legacy_tool() {
    let temp = TempFile::new("notes_legacy");
    fs::write(
        &temp.path,
        "id,reg_date,edit_date,user,note,due_date,due_time\r\n\
         1,2023-05-01 12:00:00,,bob,Call mom,2023-05-02,18:00\r\n\
         2,2023-05-01 12:01:00,2023-05-03 09:00:00,bob,Water plants,2023-05-04,08:00\r\n",
    )
    .expect("write should succeed");

    let mut store = load(&temp.path, IdPolicy::Positional).expect("load should succeed");
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[1].text, "Water plants");
    assert_eq!(store.list()[1].edited_at, "2023-05-03 09:00:00");

    // Loaded ids are strings; new ids still follow the length rule.
    let added = store.add(NewNote::new("new")).id.clone();
    assert_eq!(added, "3");
}

#[test]
fn test_default_file_name() {
    assert_eq!(DEFAULT_FILE_NAME, "notes_db.csv");
}
