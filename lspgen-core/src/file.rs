use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file into `base`, replacing any existing file.
    ///
    /// `base` must already exist; see [`ensure_dir`].
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        let content = self.render()?;
        std::fs::write(&path, content).map_err(|e| Error::write(&path, e))?;
        Ok(path)
    }
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| Error::output_dir(dir, e))?;
    info!(dir = %dir.display(), "created output directory");
    Ok(())
}
