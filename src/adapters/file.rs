use crate::domain::ports::PayloadSource;
use crate::utils::error::{MappingError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads raw payloads saved as JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct FilePayloadSource {
    base_path: PathBuf,
}

impl FilePayloadSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

#[async_trait]
impl PayloadSource for FilePayloadSource {
    async fn load(&self, name: &str) -> Result<Value> {
        let full_path = self.resolve(name);
        tracing::debug!("📂 Reading payload from {}", full_path.display());

        let content = tokio::fs::read(&full_path).await?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Err(MappingError::ProcessingError {
                message: format!("Payload file {} is empty", full_path.display()),
            });
        }

        let payload: Value = serde_json::from_slice(&content)?;
        tracing::debug!("📂 Loaded {} bytes from {}", content.len(), full_path.display());
        Ok(payload)
    }
}
