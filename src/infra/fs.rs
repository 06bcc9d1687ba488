//! File I/O for post fixtures.

use crate::domain::{PostContent, PostFields};
use crate::infra::format::{ParseError, parse, serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors during file system operations on post fixtures.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("post file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse post at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("posts directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a post fixture from a file path.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
/// Returns `FsError::Parse` if the header lines are missing.
pub fn read_post(path: &Path) -> Result<PostContent, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    parse(&content).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Writes a post fixture to a file path, replacing any existing file.
///
/// The file is opened with create + truncate and written in place. The
/// parent directory must already exist; it is never created here.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::NotADirectory` if the parent exists but is not a directory.
/// Returns `FsError::PermissionDenied` or `FsError::Io` if the write fails.
pub fn write_post(path: &Path, fields: &PostFields) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(FsError::ParentNotFound { path: path.into() }),
    };

    match std::fs::metadata(parent) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(FsError::NotADirectory {
                path: parent.into(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::ParentNotFound {
                path: parent.into(),
            });
        }
        Err(e) => return Err(FsError::from_io(parent, e)),
    }

    let file = File::create(path).map_err(|e| FsError::from_io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(serialize(fields).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| FsError::from_io(path, e))?;

    Ok(())
}

/// Lists the post fixture files directly inside a directory.
///
/// Skips hidden files (starting with `.`) and subdirectories. Paths are
/// returned sorted by file name and include the input directory.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_posts_directory(dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let paths = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .collect();

    Ok(paths)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}
