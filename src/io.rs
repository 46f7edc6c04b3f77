/// IO 层模块
///
/// 该模块提供文本文件读写的抽象接口和基于文件系统的默认实现。
/// 文本与值之间的转换交给注入的 `TextSerializer`，本层只负责
/// 扩展名校验、目录创建和文件句柄的生命周期。
///
/// # 架构设计
///
/// - **traits**: 定义 ReadFiles/WriteFiles trait 接口
/// - **text_file_io**: 文本文件的默认实现 `TextFileSerializer`
///
/// # 使用示例
///
/// ```rust,ignore
/// use text_file_serializer::io::{ReadFiles, TextFileSerializer, WriteFiles};
/// use text_file_serializer::{JsonTextSerializer, LogDebugger};
///
/// let files = TextFileSerializer::new(JsonTextSerializer, LogDebugger);
/// files.write(Path::new("out/data.json"), &settings)?;
/// let loaded: Option<Settings> = files.read(Path::new("out/data.json"))?;
/// ```
pub mod traits;
pub mod text_file_io;

// === 导出 trait 定义 ===
pub use traits::{ReadFiles, WriteFiles, WriteOutcome};

// === 导出默认实现 ===
pub use text_file_io::TextFileSerializer;
