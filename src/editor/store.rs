use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// 存储错误
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("存储空间不足: 需要 {size} 字节，上限 {limit} 字节")]
    QuotaExceeded { limit: usize, size: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 单槽快照存储：每个键只保存最新一份文本
pub trait SnapshotStore: Send + Sync {
    fn save(&self, key: &str, text: &str) -> StoreResult<()>;
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
}

/// 目录下每个键一个文件
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 键中的非字母数字字符替换为 `_`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.txt", name))
    }
}

impl SnapshotStore for FileStore {
    fn save(&self, key: &str, text: &str) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        // 先写临时文件再改名，避免留下半截快照
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, text)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// 内存存储，可设置容量上限
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        MemoryStore {
            slots: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&self, key: &str, text: &str) -> StoreResult<()> {
        if let Some(limit) = self.quota {
            if text.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    limit,
                    size: text.len(),
                });
            }
        }
        self.slots().insert(key.to_string(), text.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }
}
