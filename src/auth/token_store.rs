use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::{ClientError, ClientResult};

/// Storage key the bearer token lives under
pub const TOKEN_KEY: &str = "token";

/// Process-wide credential holder handed to every service call.
///
/// The auth service is the only writer; everything else reads.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self) -> ClientResult<Option<String>>;

    async fn set(&self, token: &str) -> ClientResult<()>;

    async fn clear(&self) -> ClientResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> ClientResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> ClientResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

/// Key/value JSON file on disk, the CLI counterpart of browser storage.
/// Other keys in the file are preserved on write. A file that is not a JSON
/// object reads as empty but is never overwritten.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ClientResult<Map<String, Value>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{} is not a JSON object", self.path.display()),
            )
            .into()),
        }
    }

    /// Corrupt contents count as an empty store when only reading.
    async fn load_lenient(&self) -> ClientResult<Map<String, Value>> {
        match self.load().await {
            Err(ClientError::Storage(e)) if e.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!(path = %self.path.display(), error = %e, "Token file is not a JSON object, ignoring contents");
                Ok(Map::new())
            }
            other => other,
        }
    }

    async fn save(&self, map: Map<String, Value>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> ClientResult<Option<String>> {
        let map = self.load_lenient().await?;
        Ok(map.get(TOKEN_KEY).and_then(Value::as_str).map(str::to_string))
    }

    async fn set(&self, token: &str) -> ClientResult<()> {
        let mut map = self.load().await?;
        map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.save(map).await?;
        tracing::debug!(path = %self.path.display(), "Token persisted");
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        let mut map = self.load_lenient().await?;
        if map.remove(TOKEN_KEY).is_some() {
            self.save(map).await?;
        }
        Ok(())
    }
}
