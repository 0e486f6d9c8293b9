use std::fs;
use std::io::ErrorKind;

use tempfile::TempDir;

const FILE_NAME: &str = "file.txt";

fn src_with_file(tmp: &TempDir) -> std::path::PathBuf {
    let src = tmp.path().join("srcDir");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join(FILE_NAME), "contents").unwrap();
    src
}

#[test]
fn touch_creates_empty_file() {
    let tmp = TempDir::new().unwrap();
    ff_rs::touch(tmp.path(), FILE_NAME).unwrap();
    assert_eq!(fs::read_to_string(tmp.path().join(FILE_NAME)).unwrap(), "");
}

#[test]
fn touch_truncates_existing_file() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    ff_rs::touch(src.join(FILE_NAME), "").unwrap();
    assert_eq!(fs::read_to_string(src.join(FILE_NAME)).unwrap(), "");
}

#[test]
fn mv_moves_tree_and_removes_source() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    fs::create_dir(src.join("nested")).unwrap();
    fs::write(src.join("nested").join("inner.txt"), "inner").unwrap();
    let dest = tmp.path().join("destDir");

    ff_rs::mv(&src, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest.join(FILE_NAME)).unwrap(), "contents");
    assert_eq!(
        fs::read_to_string(dest.join("nested").join("inner.txt")).unwrap(),
        "inner"
    );
    let err = fs::read_dir(&src).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn mv_failed_copy_keeps_source() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");
    let err = ff_rs::mv(&missing, tmp.path().join("dest")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn rename_moves_single_file() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    ff_rs::rename(src.join(FILE_NAME), src.join("renamed.txt")).unwrap();
    assert_eq!(ff_rs::readdir(&src).unwrap(), vec!["renamed.txt"]);
}

#[test]
fn rmrf_removes_tree() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    ff_rs::rmrf(&src).unwrap();
    assert!(!src.exists());
}

#[test]
fn rmrf_removes_single_file() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    ff_rs::rmrf(src.join(FILE_NAME)).unwrap();
    assert!(src.exists());
    assert!(!src.join(FILE_NAME).exists());
}

#[test]
fn rmrf_tolerates_missing_target() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    ff_rs::rmrf(&src).unwrap();
    ff_rs::rmrf(&src).unwrap();
}

#[test]
fn cp_copies_recursively_and_keeps_source() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    fs::create_dir(src.join("sub")).unwrap();
    fs::write(src.join("sub").join("deep.txt"), "deep").unwrap();
    let dest = tmp.path().join("a").join("b").join("dest");

    ff_rs::cp(&src, &dest).unwrap();

    assert_eq!(ff_rs::readdir(&src).unwrap(), vec![FILE_NAME, "sub"]);
    assert_eq!(ff_rs::readdir(&dest).unwrap(), vec![FILE_NAME, "sub"]);
    assert_eq!(fs::read_to_string(dest.join("sub").join("deep.txt")).unwrap(), "deep");
}

#[test]
fn read_gets_file_contents() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    assert_eq!(ff_rs::read(&src, FILE_NAME).unwrap(), "contents");
    assert_eq!(ff_rs::read(src.join(FILE_NAME), "").unwrap(), "contents");
}

#[test]
fn read_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = ff_rs::read(tmp.path(), "nope.txt").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), tmp.path().join("nope.txt"));
}

#[test]
fn read_non_utf8_is_invalid_data() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bin"), [0xffu8, 0xfe, 0x00]).unwrap();
    let err = ff_rs::read(tmp.path(), "bin").unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidData));
}

#[test]
fn write_creates_file() {
    let tmp = TempDir::new().unwrap();
    ff_rs::write("contents", tmp.path(), FILE_NAME).unwrap();
    assert_eq!(ff_rs::readdir(tmp.path()).unwrap(), vec![FILE_NAME]);
    assert_eq!(fs::read_to_string(tmp.path().join(FILE_NAME)).unwrap(), "contents");
}

#[test]
fn write_normalizes_path() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    let dotted = src.join("..").join("srcDir").join(".");
    ff_rs::write("changed", dotted, FILE_NAME).unwrap();
    assert_eq!(fs::read_to_string(src.join(FILE_NAME)).unwrap(), "changed");
}

#[test]
fn write_absolute_file_name_stays_under_path() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    ff_rs::write("nested", &src, "/inner.txt").unwrap();
    assert_eq!(fs::read_to_string(src.join("inner.txt")).unwrap(), "nested");
}

#[test]
fn readdir_lists_sorted_names() {
    let tmp = TempDir::new().unwrap();
    for name in ["c.txt", "a.txt", "b"] {
        fs::write(tmp.path().join(name), "").unwrap();
    }
    assert_eq!(ff_rs::readdir(tmp.path()).unwrap(), vec!["a.txt", "b", "c.txt"]);
}

#[test]
fn mkdir_creates_missing_parents() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("x").join("y").join("z");
    let first = ff_rs::mkdir(&target).unwrap();
    assert_eq!(first, Some(tmp.path().join("x")));
    assert!(ff_rs::readdir(&target).unwrap().is_empty());

    assert_eq!(ff_rs::mkdir(&target).unwrap(), None);
}

#[test]
fn mkdir_over_file_fails() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    assert!(ff_rs::mkdir(src.join(FILE_NAME)).is_err());
}

#[test]
fn append_adds_to_existing_file() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    ff_rs::append("line2", &src, FILE_NAME).unwrap();
    assert_eq!(fs::read_to_string(src.join(FILE_NAME)).unwrap(), "contentsline2");
}

#[test]
fn append_creates_missing_file() {
    let tmp = TempDir::new().unwrap();
    ff_rs::append("first", tmp.path(), "new.txt").unwrap();
    assert_eq!(fs::read_to_string(tmp.path().join("new.txt")).unwrap(), "first");
}

#[test]
fn stat_reports_metadata() {
    let tmp = TempDir::new().unwrap();
    let src = src_with_file(&tmp);
    let metadata = ff_rs::stat(src.join(FILE_NAME)).unwrap();
    assert!(metadata.is_file());
    assert_eq!(metadata.len(), "contents".len() as u64);
    assert!(ff_rs::stat(&src).unwrap().is_dir());
    assert!(ff_rs::stat(src.join("missing")).unwrap_err().is_not_found());
}
