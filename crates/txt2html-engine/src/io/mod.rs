use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::render::external::ExternalFiles;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(PathBuf),
}

/// Read a source document
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Where the page for `source` goes: `<output_dir>/<file name>.html`.
///
/// The full file name is kept, so `notes.txt` becomes `notes.txt.html`.
pub fn output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let mut name = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".html");
    output_dir.join(name)
}

/// Write a rendered page, creating the output directory if needed
pub fn write_page(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        if parent.is_file() {
            return Err(IoError::InvalidOutputDir(parent.to_path_buf()));
        }
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, html).map_err(IoError::Io)
}

/// Resolves `{{path}}` includes relative to the source document's directory.
#[derive(Debug, Clone)]
pub struct FsExternalFiles {
    root: PathBuf,
}

impl FsExternalFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Rooted at the directory containing `source`.
    pub fn beside(source: &Path) -> Self {
        Self::new(source.parent().unwrap_or(Path::new(".")))
    }
}

impl ExternalFiles for FsExternalFiles {
    fn read_to_string(&self, path: &str) -> Option<String> {
        let full = self.root.join(path);
        if !full.exists() {
            return None;
        }
        match fs::read_to_string(&full) {
            Ok(contents) => Some(contents),
            Err(err) => {
                warn!("could not read included file {}: {err}", full.display());
                None
            }
        }
    }
}
