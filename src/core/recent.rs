//! Recently opened documents, persisted as a TOML key-value file

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Key holding the recent list inside the backing file
pub const RECENT_KEY: &str = "recent-opened";

/// Maximum number of remembered documents
pub const MAX_RECENT: usize = 10;

/// Errors raised while updating the recent list.
///
/// `list` never fails: a missing or corrupt file reads as an empty list.
/// Updates fail when the file exists but cannot be read, so other keys in it
/// are never thrown away.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access recent documents at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize recent documents: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Bounded, deduplicated, most-recent-first list of opened document paths
#[derive(Debug)]
pub struct RecentDocuments {
    /// Backing TOML file
    path: PathBuf,
    /// Snapshot taken at open and after every successful update
    entries: Vec<String>,
}

impl RecentDocuments {
    /// Open the store at `path`, loading whatever valid list it contains
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_table(&path) {
            Ok(table) => entries_from(table.as_ref()),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                Vec::new()
            }
        };
        tracing::info!(
            "Loaded {} recent documents from {}",
            entries.len(),
            path.display()
        );
        Self { path, entries }
    }

    /// Path of the backing file
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current list, most recent first
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    /// Move `doc` to the front of the list, persisting the result.
    ///
    /// The list is rebuilt from the file, not from the snapshot, so entries
    /// written by another running instance survive.
    pub fn record_opened(&mut self, doc: impl Into<String>) -> StoreResult<()> {
        let doc = doc.into();
        let mut table = self.load_for_update()?;

        let mut next = Vec::with_capacity(MAX_RECENT);
        next.push(doc.clone());
        next.extend(
            entries_from(Some(&table))
                .into_iter()
                .filter(|p| *p != doc),
        );
        next.truncate(MAX_RECENT);

        let array = next.iter().cloned().map(toml::Value::String).collect();
        table.insert(RECENT_KEY.to_string(), toml::Value::Array(array));
        self.store(&table)?;

        self.entries = next;
        tracing::debug!("Recorded recent document: {}", doc);
        Ok(())
    }

    /// Forget every recent document
    pub fn clear(&mut self) -> StoreResult<()> {
        let mut table = self.load_for_update()?;
        table.remove(RECENT_KEY);
        self.store(&table)?;

        self.entries.clear();
        tracing::info!("Cleared recent documents");
        Ok(())
    }

    /// Current file contents; missing or corrupt files start a fresh table
    fn load_for_update(&self) -> StoreResult<toml::Table> {
        read_table(&self.path)
            .map(Option::unwrap_or_default)
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn store(&self, table: &toml::Table) -> StoreResult<()> {
        let content = toml::to_string_pretty(table)?;
        write_atomic(&self.path, &content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Parsed backing file.
///
/// `Ok(None)` when the file is missing or not valid TOML; `Err` when it
/// exists but cannot be read.
fn read_table(path: &Path) -> io::Result<Option<toml::Table>> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let parsed = String::from_utf8(content)
        .map_err(|e| e.to_string())
        .and_then(|text| text.parse::<toml::Table>().map_err(|e| e.to_string()));
    match parsed {
        Ok(table) => Ok(Some(table)),
        Err(e) => {
            tracing::warn!("Ignoring corrupt store {}: {}", path.display(), e);
            Ok(None)
        }
    }
}

fn entries_from(table: Option<&toml::Table>) -> Vec<String> {
    let Some(toml::Value::Array(values)) = table.and_then(|t| t.get(RECENT_KEY)) else {
        return Vec::new();
    };

    // Hand-edited files may carry duplicates or too many entries
    let mut entries: Vec<String> = Vec::new();
    for value in values {
        if let toml::Value::String(doc) = value {
            if !entries.contains(doc) {
                entries.push(doc.clone());
            }
        }
    }
    entries.truncate(MAX_RECENT);
    entries
}

/// Write through a sibling temp file so a crash never leaves a half-written store
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let result = write_synced(&tmp, content).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
