use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};

use tempfile::TempDir;
use utilkit_core::seek_to;

#[test]
fn finds_marker_in_file_and_leaves_reader_after_it() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("image.bin");
    let mut data = vec![0u8; 4096];
    data.extend_from_slice(b"HDR!");
    data.extend_from_slice(b"payload");
    fs::write(&path, &data).unwrap();

    let mut file = File::open(&path).unwrap();
    assert_eq!(seek_to(&mut file, b"HDR!").unwrap(), Some(4100));

    let mut rest = String::new();
    file.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "payload");
}

#[test]
fn missing_marker_reads_whole_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("plain.txt");
    fs::write(&path, b"no markers in this file at all").unwrap();

    let mut file = File::open(&path).unwrap();
    assert_eq!(seek_to(&mut file, b"HDR!").unwrap(), None);
    let end = file.seek(SeekFrom::Current(0)).unwrap();
    assert_eq!(end, fs::metadata(&path).unwrap().len());
}

#[test]
fn empty_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let mut file = File::open(&path).unwrap();
    assert_eq!(seek_to(&mut file, b"\x00").unwrap(), None);
}
