use std::fmt;

#[derive(Debug, Clone)]
pub enum BitsnipError {
    Validation(String),
    Config(String),
    FileOperation(String),
    Service(String),
    Transport(String),
    Serialization(String),
    RequestInFlight(String),
    Clipboard(String),
}

impl BitsnipError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            BitsnipError::Validation(_) => "E001",
            BitsnipError::Config(_) => "E002",
            BitsnipError::FileOperation(_) => "E003",
            BitsnipError::Service(_) => "E004",
            BitsnipError::Transport(_) => "E005",
            BitsnipError::Serialization(_) => "E006",
            BitsnipError::RequestInFlight(_) => "E007",
            BitsnipError::Clipboard(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            BitsnipError::Validation(_) => "Validation Error",
            BitsnipError::Config(_) => "Configuration Error",
            BitsnipError::FileOperation(_) => "File Operation Error",
            BitsnipError::Service(_) => "Service Error",
            BitsnipError::Transport(_) => "Transport Error",
            BitsnipError::Serialization(_) => "Serialization Error",
            BitsnipError::RequestInFlight(_) => "Request In Flight",
            BitsnipError::Clipboard(_) => "Clipboard Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            BitsnipError::Validation(msg) => msg,
            BitsnipError::Config(msg) => msg,
            BitsnipError::FileOperation(msg) => msg,
            BitsnipError::Service(msg) => msg,
            BitsnipError::Transport(msg) => msg,
            BitsnipError::Serialization(msg) => msg,
            BitsnipError::RequestInFlight(msg) => msg,
            BitsnipError::Clipboard(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BitsnipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BitsnipError {}

// 便捷的构造函数
impl BitsnipError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BitsnipError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        BitsnipError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        BitsnipError::FileOperation(msg.into())
    }

    pub fn service<T: Into<String>>(msg: T) -> Self {
        BitsnipError::Service(msg.into())
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        BitsnipError::Transport(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BitsnipError::Serialization(msg.into())
    }

    pub fn request_in_flight<T: Into<String>>(msg: T) -> Self {
        BitsnipError::RequestInFlight(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        BitsnipError::Clipboard(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for BitsnipError {
    fn from(err: std::io::Error) -> Self {
        BitsnipError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BitsnipError {
    fn from(err: serde_json::Error) -> Self {
        BitsnipError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BitsnipError>;
