pub mod debug;
pub mod io;
pub mod serializer;
pub mod utils;
pub mod validator;

// 重新导出主要结构
pub use debug::{Debugger, LogDebugger, MemoryDebugger};
pub use io::{ReadFiles, TextFileSerializer, WriteFiles, WriteOutcome};
pub use serializer::{JsonTextSerializer, SerializationKind, TextSerializer};
pub use utils::{safe_create_directory, FileSerializerError, Result};
pub use validator::is_valid_extension_for_type;
