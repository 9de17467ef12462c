//! Rotating file writer with size-based rotation and backup retention.
//!
//! The terminal is owned by the UI, so log output goes to a file. To keep
//! disk usage bounded the file is rotated once it would grow past
//! [`MAX_FILE_SIZE_BYTES`]: `pkgview.log` becomes `pkgview.log.1`, the
//! previous `.1` becomes `.2` and so on, keeping [`MAX_BACKUP_FILES`] backups.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

struct Inner {
    file: Option<File>,
    written: u64,
}

/// Thread-safe rotating log file.
///
/// Cloning is cheap and every clone writes to the same file, so the writer
/// can be handed to `tracing_subscriber` as a `MakeWriter` closure.
///
/// # Example
///
/// ```rust
/// use pkgview::observability::RotatingFile;
/// use std::io::Write;
///
/// let dir = tempfile::tempdir()?;
/// let mut log = RotatingFile::new(dir.path().join("pkgview.log"));
/// writeln!(log, "started")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct RotatingFile {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    inner: Arc<Mutex<Inner>>,
}

impl RotatingFile {
    /// Creates a writer for `file_path` with the default limits.
    ///
    /// The file is not opened until the first write, so construction always
    /// succeeds.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with custom rotation limits.
    #[must_use]
    pub fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            inner: Arc::new(Mutex::new(Inner {
                file: None,
                written: 0,
            })),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn open(&self, inner: &mut Inner) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        inner.written = file.metadata().map(|m| m.len()).unwrap_or(0);
        inner.file = Some(file);
        Ok(())
    }

    /// Shifts `.1 .. .n-1` up by one, dropping the oldest, and moves the
    /// live file to `.1`.
    fn rotate(&self, inner: &mut Inner) -> io::Result<()> {
        inner.file = None;
        if self.max_backups == 0 {
            fs::remove_file(&self.file_path).or_else(ignore_missing)?;
        } else {
            fs::remove_file(self.backup_path(self.max_backups)).or_else(ignore_missing)?;
            for index in (1..self.max_backups).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            if self.file_path.exists() {
                fs::rename(&self.file_path, self.backup_path(1))?;
            }
        }
        self.open(inner)
    }
}

fn ignore_missing(e: io::Error) -> io::Result<()> {
    if e.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(e)
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if inner.file.is_none() {
            self.open(&mut inner)?;
        }
        if inner.written > 0 && inner.written + buf.len() as u64 > self.max_bytes {
            self.rotate(&mut inner)?;
        }

        let file = inner
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        inner.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;
        match inner.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}
