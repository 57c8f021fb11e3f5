//! Handles on PDF files the user asked to open
//!
//! Nothing here looks inside the file. Rendering belongs to the view layer,
//! which receives the path through [`crate::shell::ipc::ShellEvent::FileOpen`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

/// An opened PDF file
#[derive(Debug, Clone)]
pub struct PdfDocument {
    /// File path
    pub path: PathBuf,
    /// Size on disk in bytes
    pub size: u64,
    /// Last modification time
    pub last_modified: Option<SystemTime>,
}

impl PdfDocument {
    /// Open a document from a file
    pub fn open(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        if !metadata.is_file() {
            anyhow::bail!("Not a regular file: {}", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            last_modified: metadata.modified().ok(),
        })
    }

    /// Get the document title (filename without extension)
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Human readable size, e.g. "1.4 MB"
    pub fn display_size(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size, UNITS[0])
        } else {
            format!("{:.1} {}", size, UNITS[unit])
        }
    }
}

/// Check if a path looks like a PDF file
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_reads_metadata() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Report.pdf");
        fs::write(&path, b"%PDF-1.7\n").unwrap();

        let doc = PdfDocument::open(&path).unwrap();
        assert_eq!(doc.title(), "Report");
        assert_eq!(doc.size, 9);
        assert_eq!(doc.display_size(), "9 B");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(PdfDocument::open(&dir.path().join("gone.pdf")).is_err());
    }

    #[test]
    fn test_open_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(PdfDocument::open(dir.path()).is_err());
    }

    #[test]
    fn test_display_size_units() {
        let doc = PdfDocument {
            path: PathBuf::from("/tmp/a.pdf"),
            size: 1536,
            last_modified: None,
        };
        assert_eq!(doc.display_size(), "1.5 KB");
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(Path::new("/docs/a.pdf")));
        assert!(is_pdf(Path::new("/docs/A.PDF")));
        assert!(!is_pdf(Path::new("/docs/a.txt")));
        assert!(!is_pdf(Path::new("/docs/pdf")));
    }
}
