use std::fmt;
use std::sync::Mutex;

/// 诊断输出 trait
///
/// 只接收警告信息，调用方不关心结果，实现不应阻塞。
pub trait Debugger {
    /// 输出一条格式化的警告
    fn log_warning_format(&self, args: fmt::Arguments<'_>);
}

impl<D: Debugger + ?Sized> Debugger for &D {
    fn log_warning_format(&self, args: fmt::Arguments<'_>) {
        (**self).log_warning_format(args)
    }
}

/// 默认诊断输出，转发到 `log` 门面
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDebugger;

impl Debugger for LogDebugger {
    fn log_warning_format(&self, args: fmt::Arguments<'_>) {
        log::warn!(target: "text_file_serializer", "{}", args);
    }
}

/// 记录所有警告的诊断输出（用于测试和事后检查）
#[derive(Debug, Default)]
pub struct MemoryDebugger {
    warnings: Mutex<Vec<String>>,
}

impl MemoryDebugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的警告副本
    pub fn warnings(&self) -> Vec<String> {
        match self.warnings.lock() {
            Ok(warnings) => warnings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self) -> usize {
        self.warnings().len()
    }

    pub fn clear(&self) {
        match self.warnings.lock() {
            Ok(mut warnings) => warnings.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Debugger for MemoryDebugger {
    fn log_warning_format(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        match self.warnings.lock() {
            Ok(mut warnings) => warnings.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }
}
