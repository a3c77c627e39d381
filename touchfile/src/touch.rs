use std::fs::{ File, OpenOptions };
use std::io::{ Seek, SeekFrom, Write };
use std::path::Path;

use filetime::FileTime;
use tracing::debug;

use crate::error::{ TouchError, TouchResult };
use crate::utils::is_file;

/// Dummy byte appended then truncated away by [`TouchStrategy::AppendTruncate`].
const SENTINEL: &[u8] = b" ";

/// How the modification time of an existing file is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchStrategy {
    /// Set the mtime directly through the open handle. Content is never written.
    #[default]
    SetTimes,
    /// Append a sentinel byte and truncate back to the original length.
    AppendTruncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// An existing regular file had its mtime advanced.
    Touched,
    /// No file existed, an empty one was created.
    Created,
}

impl TouchOutcome {
    pub fn code(self) -> i32 {
        match self {
            TouchOutcome::Touched => 0,
            TouchOutcome::Created => 1,
        }
    }
}

/// Marks the file at `path` as modified without changing its contents,
/// creating an empty file when none exists.
pub fn touch_file<P: AsRef<Path>>(path: P) -> TouchResult<TouchOutcome> {
    touch_file_with(path, TouchStrategy::default())
}

pub fn touch_file_with<P: AsRef<Path>>(
    path: P,
    strategy: TouchStrategy
) -> TouchResult<TouchOutcome> {
    let path = path.as_ref();

    if is_file(path) {
        touch_existing(path, strategy)?;
        debug!(path = %path.display(), ?strategy, "touched existing file");
        return Ok(TouchOutcome::Touched);
    }

    create_empty(path)?;
    debug!(path = %path.display(), "created new file");
    Ok(TouchOutcome::Created)
}

fn touch_existing(path: &Path, strategy: TouchStrategy) -> TouchResult<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| TouchError::Open { path: path.to_path_buf(), source })?;

    match strategy {
        TouchStrategy::SetTimes => set_modified_now(&file, path),
        TouchStrategy::AppendTruncate => append_and_truncate(&mut file, path),
    }
}

fn set_modified_now(file: &File, path: &Path) -> TouchResult<()> {
    filetime::set_file_handle_times(file, None, Some(FileTime::now()))
        .map_err(|source| TouchError::SetTimes { path: path.to_path_buf(), source })
}

fn append_and_truncate(file: &mut File, path: &Path) -> TouchResult<()> {
    let size = file
        .metadata()
        .map_err(|source| TouchError::Open { path: path.to_path_buf(), source })?
        .len();

    file.seek(SeekFrom::End(0))
        .and_then(|_| file.write_all(SENTINEL))
        .map_err(|source| TouchError::Write { path: path.to_path_buf(), source })?;

    file.set_len(size).map_err(|source| TouchError::Truncate { path: path.to_path_buf(), source })
}

fn create_empty(path: &Path) -> TouchResult<File> {
    // no truncate: a file that appeared since the existence check keeps its content
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map_err(|source| TouchError::Create { path: path.to_path_buf(), source })
}
