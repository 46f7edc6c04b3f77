use std::path::Path;

use crate::serializer::SerializationKind;

/// 检查文件扩展名是否与序列化格式匹配
///
/// 扩展名必须带前导点（如 ".json"），比较时忽略大小写。空扩展名总是无效。
pub fn is_valid_extension_for_type(kind: SerializationKind, extension: &str) -> bool {
    if extension.is_empty() {
        return false;
    }

    kind.extensions()
        .iter()
        .any(|ext| ext.eq_ignore_ascii_case(extension))
}

/// 获取路径的扩展名（含前导点）
///
/// 取文件名中最后一个点及其之后的部分，点文件 ".json" 的扩展名是 ".json"。
/// 没有点或以点结尾时返回空字符串。
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();

    match name.rfind('.') {
        Some(index) if index + 1 < name.len() => name[index..].to_string(),
        _ => String::new(),
    }
}
