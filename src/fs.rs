//! Thin wrappers over `std::fs`.
//!
//! Every operation joins and normalizes its path arguments with [`path`]
//! before touching the disk, so `read("data/../out", "file.txt")` reads
//! `out/file.txt`. An empty `file_name` means `path` already names the file.

use crate::error::{Error, Result};
use std::fs::{self, Metadata, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Joins path segments and normalizes the result lexically.
///
/// Segments are concatenated, never resolved against each other: a root in a
/// later segment does not reset the path. `.` is dropped, `..` removes the
/// previous name (and is dropped at the root of an absolute path). An empty
/// result becomes `.`.
///
/// ```
/// use std::path::Path;
///
/// let joined = ff_rs::path(["/folder1", "./../folder2", "file.ext"]);
/// assert_eq!(joined, Path::new("/folder2/file.ext"));
/// ```
pub fn path<I, P>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut result = PathBuf::new();
    let mut has_root = false;
    let mut first_segment = true;
    let mut names = 0usize; // names that a `..` may pop

    for segment in segments {
        let segment = segment.as_ref();
        if segment.as_os_str().is_empty() {
            continue;
        }
        for component in segment.components() {
            match component {
                Component::Prefix(_) => {
                    if first_segment {
                        result.push(component);
                    }
                }
                Component::RootDir => {
                    if first_segment && !has_root {
                        result.push(component);
                        has_root = true;
                    }
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if names > 0 {
                        result.pop();
                        names -= 1;
                    } else if !has_root {
                        result.push("..");
                    }
                }
                Component::Normal(name) => {
                    result.push(name);
                    names += 1;
                }
            }
        }
        first_segment = false;
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }
    result
}

/// `path` with an optional `file_name` joined onto it
pub(crate) fn full_path(path: impl AsRef<Path>, file_name: impl AsRef<Path>) -> PathBuf {
    self::path([path.as_ref(), file_name.as_ref()])
}

/// Creates an empty file, truncating any existing one.
pub fn touch(path: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Result<()> {
    write("", path, file_name)
}

/// Moves a directory tree: copies `src` into `dest`, then removes `src`.
///
/// Not transactional. A failed copy leaves `src` untouched; a failed removal
/// after a successful copy leaves both trees in place.
pub fn mv(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = path([src]);
    let dest = path([dest]);
    log::debug!("mv {} -> {}", src.display(), dest.display());
    cp(&src, &dest)?;
    rmrf(&src)
}

/// Renames a single file or directory.
pub fn rename(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = path([src]);
    let dest = path([dest]);
    log::debug!("rename {} -> {}", src.display(), dest.display());
    fs::rename(&src, &dest).map_err(|e| Error::io(&src, e))
}

/// Removes a file or a whole directory tree. A missing target is not an error.
pub fn rmrf(path: impl AsRef<Path>) -> Result<()> {
    let target = self::path([path]);
    log::debug!("rmrf {}", target.display());

    let metadata = match fs::symlink_metadata(&target) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io(&target, e)),
    };
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(&target)
    } else {
        fs::remove_file(&target)
    };
    match removed {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(Error::io(&target, e)),
        _ => Ok(()),
    }
}

/// Copies the contents of `src` into `dest` recursively, creating `dest` and
/// any missing parents.
pub fn cp(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = path([src]);
    let dest = path([dest]);
    log::debug!("cp {} -> {}", src.display(), dest.display());
    copy_tree(&src, &dest)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;
    for entry in fs::read_dir(src).map_err(|e| Error::io(src, e))? {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| Error::io(&src_path, e))?;
        if file_type.is_dir() {
            copy_tree(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|e| Error::io(&src_path, e))?;
        }
    }
    Ok(())
}

/// Reads a whole file as UTF-8 text.
pub fn read(path: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Result<String> {
    let full = full_path(path, file_name);
    log::debug!("read {}", full.display());
    fs::read_to_string(&full).map_err(|e| Error::io(&full, e))
}

/// Writes `data` to a file, creating or truncating it.
pub fn write(
    data: impl AsRef<[u8]>,
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
) -> Result<()> {
    let full = full_path(path, file_name);
    let data = data.as_ref();
    log::debug!("write {} ({} bytes)", full.display(), data.len());
    fs::write(&full, data).map_err(|e| Error::io(&full, e))
}

/// Lists the names of the immediate entries of a directory, sorted.
pub fn readdir(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = self::path([path]);
    log::debug!("readdir {}", dir.display());
    let mut names = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
        let entry = entry.map_err(|e| Error::io(&dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Creates a directory and any missing parents.
///
/// Returns the first directory that had to be created, or `None` when the
/// directory already existed.
pub fn mkdir(path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let dir = self::path([path]);
    log::debug!("mkdir {}", dir.display());

    let mut first_created = None;
    let mut current = Some(dir.as_path());
    while let Some(candidate) = current {
        if candidate.as_os_str().is_empty() || candidate.exists() {
            break;
        }
        first_created = Some(candidate.to_path_buf());
        current = candidate.parent();
    }

    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
    Ok(first_created)
}

/// Appends `data` to a file, creating it when missing.
pub fn append(
    data: impl AsRef<[u8]>,
    path: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
) -> Result<()> {
    let full = full_path(path, file_name);
    let data = data.as_ref();
    log::debug!("append {} ({} bytes)", full.display(), data.len());
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&full)
        .map_err(|e| Error::io(&full, e))?;
    file.write_all(data).map_err(|e| Error::io(&full, e))
}

/// Returns file-system metadata (size, timestamps, type), following symlinks.
pub fn stat(path: impl AsRef<Path>) -> Result<Metadata> {
    let target = self::path([path]);
    log::debug!("stat {}", target.display());
    fs::metadata(&target).map_err(|e| Error::io(&target, e))
}
