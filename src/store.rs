use std::fs;

use camino::{Utf8Path, Utf8PathBuf};

use crate::domain::AssetFileName;
use crate::error::FetchError;
use crate::fs_util;

pub const IGNORE_FILE_NAME: &str = ".gitignore";

pub const IGNORE_FILE_CONTENT: &str = "\
# Tesseract data files
*.traineddata
*.gz
# Wasm files
*.wasm
";

/// The directory the assets land in.
#[derive(Debug, Clone)]
pub struct TargetDir {
    root: Utf8PathBuf,
}

impl TargetDir {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn ensure(&self) -> Result<(), FetchError> {
        fs::create_dir_all(self.root.as_std_path())
            .map_err(|err| FetchError::Filesystem(format!("create {}: {err}", self.root)))
    }

    pub fn existing_entries(&self) -> Result<Vec<String>, FetchError> {
        fs_util::list_entry_names(self.root.as_std_path())
    }

    pub fn asset_path(&self, file_name: &AssetFileName) -> Utf8PathBuf {
        self.root.join(file_name.as_str())
    }

    pub fn ignore_file_path(&self) -> Utf8PathBuf {
        self.root.join(IGNORE_FILE_NAME)
    }

    pub fn write_ignore_file(&self) -> Result<Utf8PathBuf, FetchError> {
        let path = self.ignore_file_path();
        fs::write(path.as_std_path(), IGNORE_FILE_CONTENT)
            .map_err(|err| FetchError::Filesystem(format!("write {path}: {err}")))?;
        Ok(path)
    }

    /// Absolute form of the root, without resolving symlinks.
    pub fn absolute(&self) -> Result<Utf8PathBuf, FetchError> {
        if self.root.is_absolute() {
            return Ok(self.root.clone());
        }
        let cwd = std::env::current_dir().map_err(|err| FetchError::Filesystem(err.to_string()))?;
        let cwd = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|_| FetchError::Filesystem("invalid working directory path".to_string()))?;
        Ok(cwd.join(&self.root))
    }
}
