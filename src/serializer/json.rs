/// JSON 文本序列化策略
///
/// 完全委托给 serde_json，没有自定义解析逻辑

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{SerializationKind, TextSerializer};
use crate::utils::Result;

/// 基于 serde_json 的序列化器
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTextSerializer;

impl TextSerializer for JsonTextSerializer {
    fn serialization_type(&self) -> SerializationKind {
        SerializationKind::Json
    }

    fn as_string<T: Serialize>(&self, value: &T, pretty_print: bool) -> Result<String> {
        let text = if pretty_print {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    fn as_object<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        Ok(serde_json::from_str(text)?)
    }
}
