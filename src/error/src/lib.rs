//! 游戏错误处理模块
//!
//! 处理配置、日志、序列化等外围环节可能出现的错误。战斗规则本身不会失败：
//! 非法操作直接被忽略。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 环境变量中的配置无法解析
    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 日志系统初始化失败
    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::SerializationError(err.to_string())
    }
}

/// 将错误转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InvalidConfig { key, value } => {
            format!("Ignoring bad setting {key}={value}; using the default instead")
        }
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Log directory does not exist".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to write the log directory".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        GameError::LoggingError(msg) => format!("Logging disabled: {}", msg),
        _ => error.to_string(),
    }
}
