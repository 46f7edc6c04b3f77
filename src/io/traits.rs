/// IO 层 - trait 定义
///
/// 读和写是两个独立的能力，调用方可以只依赖其中一个。

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::utils::Result;

/// 写入操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 文件已写入
    Written,
    /// 扩展名校验未通过，没有触碰文件系统
    Skipped,
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written)
    }
}

/// 文本文件读取 trait
///
/// # 职责
/// - 读取整个文件并解码为类型化的值
/// - 扩展名不匹配时记录警告并跳过，返回 `Ok(None)`
pub trait ReadFiles {
    /// 读取文件
    ///
    /// # 参数
    /// * `file_path` - 文件路径
    ///
    /// # 返回
    /// 校验通过时返回 `Some(值)`，被跳过时返回 `None`。
    /// IO 错误和解码错误直接返回 `Err`。
    fn read<T: DeserializeOwned>(&self, file_path: &Path) -> Result<Option<T>>;

    /// 读取文件，被跳过时返回类型的默认值
    fn read_or_default<T: DeserializeOwned + Default>(&self, file_path: &Path) -> Result<T> {
        Ok(self.read(file_path)?.unwrap_or_default())
    }
}

/// 文本文件写入 trait
///
/// # 职责
/// - 将值编码为文本并整体写入文件（已有文件会被覆盖）
/// - 扩展名不匹配时记录警告并跳过，不修改文件系统
pub trait WriteFiles {
    /// 写入文件
    ///
    /// # 参数
    /// * `file_path` - 目标文件路径
    /// * `model` - 要写入的值
    fn write<T: Serialize>(&self, file_path: &Path, model: &T) -> Result<WriteOutcome>;
}
