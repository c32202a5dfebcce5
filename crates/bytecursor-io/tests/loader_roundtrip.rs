//! File source, save sink, and network source integration tests.

use std::io::Write;
use std::time::Duration;

use bytecursor::ByteCursor;
use bytecursor_io::{load_file, load_url, save_as};
use tempfile::NamedTempFile;

#[tokio::test]
async fn load_file_fills_and_rewinds() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[1, 2, 3, 4]).unwrap();

    let mut cursor = ByteCursor::new();
    cursor.write_u32(0xFFFF_FFFF);

    let cursor = load_file(cursor, file.path()).await.expect("loader resolves");
    assert_eq!(cursor.position, 0);
    assert_eq!(cursor.as_slice(), [1, 2, 3, 4]);
}

#[tokio::test]
async fn load_file_missing_path_never_resolves() {
    let rx = load_file(ByteCursor::new(), "/no/such/path.bin");
    assert!(rx.await.is_err());
}

#[tokio::test]
async fn load_url_invalid_url_never_resolves() {
    let rx = load_url(ByteCursor::new(), "not a url");
    assert!(rx.await.is_err());
}

#[tokio::test]
async fn save_then_load_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let mut cursor = ByteCursor::new();
    cursor.write_u32(0xDEAD_BEEF);
    cursor.write_utf("payload").unwrap();
    let expected = cursor.as_slice().to_vec();

    save_as(&cursor, &path);

    // Fire-and-forget sink: poll until the full contents land on disk.
    let mut written = Vec::new();
    for _ in 0..200 {
        if let Ok(bytes) = tokio::fs::read(&path).await {
            if bytes.len() == expected.len() {
                written = bytes;
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(written, expected);

    let loaded = load_file(ByteCursor::new(), &path).await.expect("loader resolves");
    assert_eq!(loaded.as_slice(), expected.as_slice());
}
