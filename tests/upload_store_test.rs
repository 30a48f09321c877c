//! Upload store behavior against a real temporary directory.

use libris::io::{is_safe_filename, UploadStore, ALLOWED_EXTENSIONS};
use libris::LibrisError;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn saves_and_lists_uploads() {
    let temp_dir = TempDir::new().unwrap();
    let store = UploadStore::new(temp_dir.path().join("uploads"));

    assert_eq!(store.list().unwrap(), Vec::<String>::new());

    store.save("notes.txt", b"session notes").unwrap();
    store.save("book.epub", b"not really an epub").unwrap();
    store.save("paper.pdf", b"%PDF-1.4").unwrap();

    assert_eq!(
        store.list().unwrap(),
        vec![
            "book.epub".to_string(),
            "notes.txt".to_string(),
            "paper.pdf".to_string()
        ]
    );

    let contents = std::fs::read(store.dir().join("notes.txt")).unwrap();
    assert_eq!(contents, b"session notes");
}

#[test]
fn directory_is_created_on_first_save_only() {
    let temp_dir = TempDir::new().unwrap();
    let store = UploadStore::new(temp_dir.path().join("nested").join("uploads"));

    assert!(!store.dir().exists());
    assert_eq!(store.list().unwrap(), Vec::<String>::new());
    assert!(!store.dir().exists()); // listing does not create it

    store.save("a.txt", b"x").unwrap();
    assert!(store.dir().exists());
}

#[test]
fn rejects_unsafe_filenames_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let store = UploadStore::new(temp_dir.path().join("uploads"));

    for bad in ["../breakout.txt", "a/b.txt", "/abs.txt", ""] {
        assert!(
            matches!(store.save(bad, b"x"), Err(LibrisError::Upload(_))),
            "expected rejection for {:?}",
            bad
        );
    }
    assert!(!store.dir().exists());
}

#[test]
fn rejects_extensions_outside_the_allow_list() {
    let temp_dir = TempDir::new().unwrap();
    let store = UploadStore::new(temp_dir.path().join("uploads"));

    assert!(store.save("malware.exe", b"x").is_err());
    assert!(store.save("archive.tar.gz", b"x").is_err());
    assert!(store.save("README", b"x").is_err());

    // The allow-list itself is the contract.
    assert_eq!(ALLOWED_EXTENSIONS, &["pdf", "txt", "epub"]);
}

#[test]
fn overwriting_an_upload_replaces_its_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let store = UploadStore::new(temp_dir.path().join("uploads"));

    store.save("notes.txt", b"v1").unwrap();
    let path = store.save("notes.txt", b"v2").unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"v2");
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn filename_safety_predicate() {
    assert!(is_safe_filename("fine.pdf"));
    assert!(is_safe_filename("weird name with spaces.txt"));
    assert!(!is_safe_filename("../up.pdf"));
    assert!(!is_safe_filename("dir/inner.pdf"));
}
