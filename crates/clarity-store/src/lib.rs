//! Storage for day plans.
//!
//! Each day's plan is a plain text file named after its ISO date
//! (`2024-01-01.plan`) inside a single plans directory. Reading a day that
//! has no file yields empty text.
//!
//! # Concurrency
//!
//! Writers take an exclusive advisory lock on `.lock` in the plans directory,
//! so an editor hook and the CLI can both save without interleaving writes.
//! Readers do not lock; a reader racing a writer may observe the previous
//! contents or the new contents.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use fs2::FileExt;
use thiserror::Error;

/// File extension for plan notes.
const PLAN_EXTENSION: &str = "plan";

/// Name of the lock file guarding writes.
const LOCK_FILE: &str = ".lock";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a plan file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to acquire the write lock.
    #[error("failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Returns the canonical storage key for a date (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A directory of day plans.
#[derive(Debug, Clone)]
pub struct PlanStore {
    root: PathBuf,
}

impl PlanStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the plans directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file that holds the plan for `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format!("{}.{PLAN_EXTENSION}", date_key(date)))
    }

    /// Reads the plan for `date`, or empty text if none has been written.
    pub fn read(&self, date: NaiveDate) -> Result<String, StoreError> {
        let path = self.path_for(date);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no plan stored");
                Ok(String::new())
            }
            Err(e) => Err(StoreError::io(&path)(e)),
        }
    }

    /// Replaces the plan for `date` with `contents`.
    pub fn write(&self, date: NaiveDate, contents: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(StoreError::io(&self.root))?;

        let lock_path = self.root.join(LOCK_FILE);
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(StoreError::io(&lock_path))?;
        FileExt::lock_exclusive(&lock_file).map_err(|source| StoreError::Lock {
            path: lock_path,
            source,
        })?;

        let path = self.path_for(date);
        let result = write_file(&path, contents);

        // Unlock errors are not actionable; the lock is released on close anyway.
        let _ = FileExt::unlock(&lock_file);

        result?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote plan");
        Ok(())
    }

    /// Lists the dates that have a stored plan, oldest first.
    ///
    /// Files whose names are not `<YYYY-MM-DD>.plan` are skipped.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.root)(e)),
        };

        let mut dates = Vec::new();
        for entry in entries {
            let path = entry.map_err(StoreError::io(&self.root))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PLAN_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match NaiveDate::parse_from_str(stem, "%Y-%m-%d") {
                Ok(date) => dates.push(date),
                Err(_) => {
                    tracing::warn!(path = %path.display(), "skipping plan with invalid date");
                }
            }
        }

        dates.sort_unstable();
        Ok(dates)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), StoreError> {
    let mut file = File::create(path).map_err(StoreError::io(path))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(StoreError::io(path))
}
