// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::LogConfig;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// `to_file` 为true时按大小滚动写入日志文件，否则输出到stderr。
///
/// # Examples
/// ```no_run
/// use graphpath::config::LogConfig;
/// use graphpath::utils::logging;
///
/// let config = LogConfig::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> Result<(), FlexiLoggerError> {
    let logger = Logger::try_with_str(&config.level)?;

    let handle = if config.to_file {
        logger
            .log_to_file(
                FileSpec::default()
                    .basename(&config.file)
                    .directory(&config.dir),
            )
            .rotate(
                Criterion::Size(config.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?
    } else {
        logger.log_to_stderr().start()?
    };

    // 保存句柄供后续 flush 使用
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    if config.to_file {
        log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    }
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
            // handle 在这里被 drop，会等待异步线程完成
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
