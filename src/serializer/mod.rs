mod json;

pub use json::JsonTextSerializer;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::utils::Result;

/// 文本序列化格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializationKind {
    /// JSON 文本
    Json,
    /// XML 文本
    Xml,
}

impl SerializationKind {
    /// 该格式接受的文件扩展名（含前导点，小写）
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SerializationKind::Json => &[".json"],
            SerializationKind::Xml => &[".xml"],
        }
    }

    /// 从文件扩展名获取序列化格式
    pub fn from_extension(extension: &str) -> Option<Self> {
        [SerializationKind::Json, SerializationKind::Xml]
            .into_iter()
            .find(|kind| crate::validator::is_valid_extension_for_type(*kind, extension))
    }
}

impl fmt::Display for SerializationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationKind::Json => write!(f, "Json"),
            SerializationKind::Xml => write!(f, "Xml"),
        }
    }
}

/// 文本序列化策略 trait
///
/// # 职责
/// - 在类型化的值和文本之间转换
/// - 声明自己产出/读取的文本格式
/// - 不负责 IO
pub trait TextSerializer {
    /// 该策略对应的文本格式
    fn serialization_type(&self) -> SerializationKind;

    /// 将值编码为文本
    ///
    /// # 参数
    /// * `value` - 要编码的值
    /// * `pretty_print` - 是否输出带缩进的文本（不影响往返结果）
    fn as_string<T: Serialize>(&self, value: &T, pretty_print: bool) -> Result<String>;

    /// 将文本解码为值
    fn as_object<T: DeserializeOwned>(&self, text: &str) -> Result<T>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(SerializationKind::from_extension(".json"), Some(SerializationKind::Json));
        assert_eq!(SerializationKind::from_extension(".XML"), Some(SerializationKind::Xml));
        assert_eq!(SerializationKind::from_extension("json"), None);
        assert_eq!(SerializationKind::from_extension(".txt"), None);
        assert_eq!(SerializationKind::from_extension(""), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SerializationKind::Json.to_string(), "Json");
        assert_eq!(SerializationKind::Xml.to_string(), "Xml");
    }
}
