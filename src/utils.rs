use thiserror::Error;
use std::path::Path;

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum FileSerializerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Text contains characters not representable in {0}")]
    UnmappableCharacters(String),
}

pub type Result<T> = std::result::Result<T, FileSerializerError>;

/// 确保文件所在目录存在
///
/// 传入的是完整文件路径而非目录路径。目录已存在时不做任何事，
/// 不会删除或修改已有的文件和目录。
pub fn safe_create_directory(file_path: &Path) -> std::io::Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
