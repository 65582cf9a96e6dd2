//! Local filesystem storage for uploaded documents.
//!
//! Files live under `<root>/files/` and are referenced from the database by their
//! path relative to `root` (for example `files/5b1f....pdf`). The router serves the
//! same directory under `/files`, so a stored path doubles as its URL path.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use uuid::Uuid;

/// Directory below the storage root that holds uploaded files.
pub const FILES_DIR: &str = "files";

/// Stores uploaded files under a root directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory served statically under `/files`.
    pub fn files_dir(&self) -> PathBuf {
        self.root.join(FILES_DIR)
    }

    /// Saves a new file under a generated name.
    ///
    /// The stored name is a random UUID followed by the extension of
    /// `original_name`, if it has one.
    ///
    /// # Arguments
    /// - `original_name` - File name supplied by the client
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Path of the stored file relative to the root
    /// - `Err(io::Error)` - Failed to create the directory or write the file
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<String> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        let relative = format!("{}/{}{}", FILES_DIR, Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(self.files_dir()).await?;
        tokio::fs::write(self.resolve(&relative)?, bytes).await?;

        tracing::debug!("Stored upload {} as {}", original_name, relative);

        Ok(relative)
    }

    /// Replaces the contents of an already stored file, keeping its path.
    pub async fn overwrite(&self, relative: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.resolve(relative)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, bytes).await
    }

    /// Removes a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, relative: &str) -> io::Result<()> {
        match tokio::fs::remove_file(self.resolve(relative)?).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Joins a stored path onto the root, refusing anything that could leave it.
    fn resolve(&self, relative: &str) -> io::Result<PathBuf> {
        let path = Path::new(relative);
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Stored file path {} is outside the files root", relative),
            ));
        }

        Ok(self.root.join(path))
    }
}
