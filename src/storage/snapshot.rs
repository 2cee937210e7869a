//! Private copies of the live history database.
//!
//! Arc keeps its History file open and writes to it while running, so it is
//! never queried in place. A [`Snapshot`] copies it into a temporary file that
//! is removed when the guard is dropped, together with any journal files
//! SQLite created next to it.

use crate::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Files SQLite may create beside a database: WAL, shared memory, rollback journal.
const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];

/// A read-consistent copy of a live database file.
///
/// The copy lives exactly as long as this guard.
#[derive(Debug)]
pub struct Snapshot {
    file: NamedTempFile,
}

impl Snapshot {
    /// Copy `live` into a new file in the system temporary directory.
    pub fn capture(live: &Path) -> Result<Self> {
        Self::capture_in(live, &std::env::temp_dir())
    }

    /// Copy `live` into a new file inside `dir`.
    pub fn capture_in(live: &Path, dir: &Path) -> Result<Self> {
        let mut source = File::open(live).map_err(|source| Error::Snapshot {
            context: "failed to open history file",
            source,
        })?;

        let mut file = tempfile::Builder::new()
            .prefix("arc-history-")
            .suffix(".sqlite")
            .tempfile_in(dir)
            .map_err(|source| Error::Snapshot {
                context: "failed to create snapshot",
                source,
            })?;

        // On failure `file` is dropped here, which removes it.
        let copied = io::copy(&mut source, file.as_file_mut()).map_err(|source| Error::Snapshot {
            context: "failed to copy history file",
            source,
        })?;

        debug!(
            live = %live.display(),
            snapshot = %file.path().display(),
            bytes = copied,
            "captured history snapshot"
        );

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Paths of the journal files SQLite would place beside the snapshot.
    pub fn sidecar_paths(&self) -> Vec<PathBuf> {
        SIDECAR_SUFFIXES
            .iter()
            .map(|suffix| {
                let mut name = OsString::from(self.file.path().as_os_str());
                name.push(suffix);
                PathBuf::from(name)
            })
            .collect()
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        // The snapshot file itself is removed by `NamedTempFile` after this.
        for sidecar in self.sidecar_paths() {
            match fs::remove_file(&sidecar) {
                Ok(()) => debug!(path = %sidecar.display(), "removed snapshot journal"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!(
                    path = %sidecar.display(),
                    error = %e,
                    "failed to remove snapshot journal"
                ),
            }
        }
        debug!(snapshot = %self.file.path().display(), "releasing history snapshot");
    }
}
