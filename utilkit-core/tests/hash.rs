use std::fs;

use tempfile::TempDir;
use utilkit_core::{Error, HashAlgorithm, hash_file, hash_file_with};

#[test]
fn same_content_same_digest_across_names() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("first.bin");
    let b = tmp.path().join("renamed copy.dat");
    fs::write(&a, b"identical bytes\x00\x01\x02").unwrap();
    fs::write(&b, b"identical bytes\x00\x01\x02").unwrap();

    assert_eq!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    for &algo in HashAlgorithm::all() {
        assert_eq!(
            hash_file_with(&a, algo).unwrap(),
            hash_file_with(&b, algo).unwrap()
        );
    }
}

#[test]
fn different_content_different_digest() {
    let tmp = TempDir::new().unwrap();
    let a = tmp.path().join("a.bin");
    let b = tmp.path().join("b.bin");
    fs::write(&a, b"version 1").unwrap();
    fs::write(&b, b"version 2").unwrap();

    assert_ne!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
}

#[test]
fn hashing_is_repeatable() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("rom.sfc");
    fs::write(&file, vec![0xA5u8; 200_000]).unwrap();

    let first = hash_file(&file).unwrap();
    let second = hash_file(&file).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 32);
}

#[test]
fn empty_file_has_well_known_md5() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("empty");
    fs::write(&file, b"").unwrap();

    assert_eq!(hash_file(&file).unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn missing_file_propagates_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = hash_file(tmp.path().join("nope.bin")).unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn directory_is_not_hashable() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(hash_file(tmp.path()), Err(Error::Io(_))));
}
