use super::StoragePort;
use crate::error::{AppError, AppResult, FileError, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// 目录存储：每个键对应目录下的一个 `{key}.json` 文件
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// 打开（必要时创建）存储目录
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();

        if root.exists() && !root.is_dir() {
            return Err(StorageError::Unavailable {
                reason: format!("{} 不是目录", root.display()),
            }
            .into());
        }

        fs::create_dir_all(&root)
            .map_err(|e| AppError::file_write_failed(root.to_string_lossy(), e))?;

        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', ':']);
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            }
            .into());
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::file_read_failed(path.to_string_lossy(), e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        debug!("写入存储: {} ({} 字节)", path.display(), value.len());
        fs::write(&path, value).map_err(|e| AppError::file_write_failed(path.to_string_lossy(), e))
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FileError::DeleteFailed {
                path: path.to_string_lossy().to_string(),
                source: e,
            }
            .into()),
        }
    }
}
