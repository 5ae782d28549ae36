//! Document discovery in folders and glob patterns.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{debug, warn};

use crate::error::{Result, StmtxError};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PNG or JPEG image.
    Image,
    Pdf,
}

impl DocumentKind {
    /// Kind for a file extension, case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// A document to extract fields from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier reported in results (the file name).
    pub name: String,
    pub path: PathBuf,
    pub kind: DocumentKind,
}

impl Document {
    pub fn new(path: PathBuf, kind: DocumentKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path, kind }
    }

    /// A document for `path` if it has a supported extension.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = DocumentKind::from_path(&path)?;
        Some(Self::new(path, kind))
    }
}

/// List supported documents directly inside `folder`, sorted by file name.
pub fn discover_documents(folder: &Path) -> Result<Vec<Document>> {
    if !folder.is_dir() {
        return Err(StmtxError::FolderNotFound(folder.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match Document::from_path(path) {
            Some(document) => documents.push(document),
            None => debug!("Skipping unsupported entry in {}", folder.display()),
        }
    }

    documents.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        "Found {} documents in {}",
        documents.len(),
        folder.display()
    );
    Ok(documents)
}

/// List supported documents matching a glob pattern, in pattern order.
pub fn discover_glob(pattern: &str) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for entry in glob(pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        if let Some(document) = Document::from_path(path) {
            documents.push(document);
        }
    }

    debug!("Pattern {} matched {} documents", pattern, documents.len());
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("PNG"), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_extension("jpeg"), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_extension("Pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("tiff"), None);
        assert_eq!(DocumentKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_discover_documents_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.jpeg", "b.pdf", "A.PNG", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let documents = discover_documents(dir.path()).unwrap();
        assert_eq!(names(&documents), vec!["A.PNG", "b.pdf", "c.jpeg"]);
        assert_eq!(documents[1].kind, DocumentKind::Pdf);
        assert_eq!(documents[1].path, dir.path().join("b.pdf"));
    }

    #[test]
    fn test_discover_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = discover_documents(&missing).unwrap_err();
        assert!(matches!(err, StmtxError::FolderNotFound(p) if p == missing));
    }

    #[test]
    fn test_discover_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_documents(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_glob() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["one.pdf", "two.pdf", "three.png"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let pattern = format!("{}/*.pdf", dir.path().display());
        let documents = discover_glob(&pattern).unwrap();
        assert_eq!(names(&documents), vec!["one.pdf", "two.pdf"]);
    }

    #[test]
    fn test_discover_glob_invalid_pattern() {
        assert!(matches!(
            discover_glob("[").unwrap_err(),
            StmtxError::Pattern(_)
        ));
    }
}
