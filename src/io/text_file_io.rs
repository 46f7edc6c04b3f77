/// 文本文件 IO 实现
///
/// 提供基于文件系统的默认文本文件读写实现

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use encoding_rs::Encoding;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::{ReadFiles, WriteFiles, WriteOutcome};
use crate::debug::Debugger;
use crate::serializer::TextSerializer;
use crate::utils::{safe_create_directory, FileSerializerError, Result};
use crate::validator::{extension_of, is_valid_extension_for_type};

/// 文本文件序列化器
///
/// 序列化策略必须与文档类型一致：JSON 策略只能用于 `.json` 文件，
/// XML 策略只能用于 `.xml` 文件。不一致时读写会被跳过并输出警告。
///
/// # 使用示例
///
/// ```rust,ignore
/// let mut files = TextFileSerializer::new(JsonTextSerializer, LogDebugger);
/// files.set_encoding_label("windows-1252")?;
/// files.write(Path::new("out/data.json"), &model)?;
/// ```
#[derive(Debug, Clone)]
pub struct TextFileSerializer<S, D> {
    serializer: S,
    debugger: D,
    /// 写入时使用的编码，读取时不使用
    encoding: &'static Encoding,
    pretty_print: bool,
}

impl<S: TextSerializer, D: Debugger> TextFileSerializer<S, D> {
    /// 创建新的文本文件序列化器（UTF-8，带缩进输出）
    pub fn new(serializer: S, debugger: D) -> Self {
        Self {
            serializer,
            debugger,
            encoding: encoding_rs::UTF_8,
            pretty_print: true,
        }
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = encoding;
    }

    /// 通过编码标签设置写入编码（如 "utf-8"、"windows-1252"、"gbk"）
    pub fn set_encoding_label(&mut self, label: &str) -> Result<()> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| FileSerializerError::UnknownEncoding(label.to_string()))?;
        self.encoding = encoding;
        Ok(())
    }

    pub fn pretty_print(&self) -> bool {
        self.pretty_print
    }

    pub fn set_pretty_print(&mut self, pretty_print: bool) {
        self.pretty_print = pretty_print;
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    pub fn debugger(&self) -> &D {
        &self.debugger
    }

    /// 校验扩展名，失败时输出警告
    fn is_valid(&self, file_path: &Path, operation: &str) -> bool {
        let extension = extension_of(file_path);
        let kind = self.serializer.serialization_type();
        let is_valid = is_valid_extension_for_type(kind, &extension);

        if !is_valid {
            if extension.is_empty() {
                self.debugger.log_warning_format(format_args!("FileExtension is null"));
            } else {
                self.debugger.log_warning_format(format_args!(
                    "You may be attempting to {} a file not supported by the member TextHandler. Type{}, FileExtension:{}",
                    operation, kind, extension
                ));
            }
        }

        is_valid
    }
}

impl<S: TextSerializer, D: Debugger> ReadFiles for TextFileSerializer<S, D> {
    fn read<T: DeserializeOwned>(&self, file_path: &Path) -> Result<Option<T>> {
        if !self.is_valid(file_path, "read") {
            return Ok(None);
        }

        let mut bytes = Vec::new();
        {
            let mut file = File::open(file_path)?;
            file.read_to_end(&mut bytes)?;
        }

        // 读取端固定按 BOM 嗅探，回退 UTF-8，与写入编码无关
        let (text, _, _) = encoding_rs::UTF_8.decode(&bytes);
        let model = self.serializer.as_object(&text)?;

        log::debug!(target: "text_file_serializer", "已读取 {} ({} 字节)", file_path.display(), bytes.len());
        Ok(Some(model))
    }
}

impl<S: TextSerializer, D: Debugger> WriteFiles for TextFileSerializer<S, D> {
    fn write<T: Serialize>(&self, file_path: &Path, model: &T) -> Result<WriteOutcome> {
        if !self.is_valid(file_path, "write") {
            return Ok(WriteOutcome::Skipped);
        }

        // 序列化或编码失败时不创建目录和文件
        let text = self.serializer.as_string(model, self.pretty_print)?;
        let (bytes, _, had_unmappable) = self.encoding.encode(&text);
        if had_unmappable {
            return Err(FileSerializerError::UnmappableCharacters(self.encoding.name().to_string()));
        }

        safe_create_directory(file_path)?;
        let mut file = File::create(file_path)?;
        file.write_all(&bytes)?;
        file.flush()?;

        log::debug!(target: "text_file_serializer", "已写入 {} ({} 字节)", file_path.display(), bytes.len());
        Ok(WriteOutcome::Written)
    }
}
