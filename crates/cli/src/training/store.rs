use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppError;

const SYSTEM_MESSAGE_FILE: &str = "system_message.txt";

/// Plain-text file holding the trained system preamble
#[derive(Debug, Clone)]
pub struct PreambleStore {
    dir: PathBuf,
    path: PathBuf,
}

impl PreambleStore {
    pub fn new(training_dir: impl Into<PathBuf>) -> Self {
        let dir = training_dir.into();
        let path = dir.join(SYSTEM_MESSAGE_FILE);
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole preamble. `None` when it has never been written.
    pub async fn read(&self) -> Result<Option<String>, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AppError::Persistence {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the preamble, creating the training directory if needed
    pub async fn write(&self, text: &str) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(AppError::Training)?;
        tokio::fs::write(&self.path, text)
            .await
            .map_err(AppError::Training)
    }
}
