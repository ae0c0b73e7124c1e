//! 存储层
//!
//! 题库以 JSON 文本的形式保存在一个键值存储中。存储后端通过 `StoragePort` 注入，
//! 测试使用内存实现，命令行使用目录实现。

pub mod bank_store;
pub mod file_storage;
pub mod memory_storage;

pub use bank_store::{QuestionBankStore, BANKS_STORAGE_KEY};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::error::AppResult;

/// 键值存储端口
pub trait StoragePort {
    /// 读取键对应的值，不存在时返回 `None`
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 写入（覆盖）键对应的值
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// 删除键，不存在时什么也不做
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
