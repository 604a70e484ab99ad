use std::fmt;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::IngestError;

/// A transcript document handed to the extraction entry points.
///
/// Every variant can yield the document's bytes. Paths go to the converter
/// as they are; bytes and readers are first written to a temporary file,
/// since the converter only reads files.
pub enum DocumentInput {
    Path(PathBuf),
    Bytes(Vec<u8>),
    Reader(Box<dyn Read + Send>),
}

impl DocumentInput {
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Read the whole document into memory.
    pub fn into_bytes(self) -> Result<Vec<u8>, IngestError> {
        let bytes = match self {
            Self::Path(path) => {
                check_path(&path)?;
                std::fs::read(&path)?
            }
            Self::Bytes(bytes) => bytes,
            Self::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                buf
            }
        };
        if bytes.is_empty() {
            return Err(IngestError::InvalidInputType("document is empty".into()));
        }
        Ok(bytes)
    }

    /// Resolve to a file on disk the converter can read.
    pub(crate) fn materialize(self) -> Result<MaterializedDocument, IngestError> {
        match self {
            Self::Path(path) => {
                check_path(&path)?;
                Ok(MaterializedDocument::Borrowed(path))
            }
            other => {
                let bytes = other.into_bytes()?;
                let mut file = tempfile::Builder::new()
                    .prefix("transcript-")
                    .suffix(".pdf")
                    .tempfile()?;
                file.write_all(&bytes)?;
                file.flush()?;
                tracing::trace!(path = %file.path().display(), bytes = bytes.len(), "wrote temporary document");
                Ok(MaterializedDocument::Temporary(file))
            }
        }
    }
}

fn check_path(path: &Path) -> Result<(), IngestError> {
    if path.is_dir() {
        return Err(IngestError::InvalidInputType(format!(
            "{} is a directory, not a document",
            path.display()
        )));
    }
    Ok(())
}

impl fmt::Debug for DocumentInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Self::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<PathBuf> for DocumentInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for DocumentInput {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for DocumentInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for DocumentInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// A document file that exists for the duration of one conversion.
///
/// The temporary variant deletes its file when dropped, on success and
/// error paths alike.
#[derive(Debug)]
pub(crate) enum MaterializedDocument {
    Borrowed(PathBuf),
    Temporary(NamedTempFile),
}

impl MaterializedDocument {
    pub(crate) fn path(&self) -> &Path {
        match self {
            Self::Borrowed(path) => path,
            Self::Temporary(file) => file.path(),
        }
    }
}
