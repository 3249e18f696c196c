use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题目校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 排序索引错误
    #[error("索引错误: {0}")]
    Index(#[from] IndexError),
    /// 保存错误
    #[error("保存错误: {0}")]
    Persist(#[from] PersistError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 题目校验错误
///
/// 在构造 `Question` 之前返回，调用方负责重新提示用户。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 题干为空（去除首尾空白后）
    #[error("text required")]
    TextRequired,
    /// 选择题的有效选项少于两个
    #[error("at least two options required")]
    NotEnoughOptions,
}

/// 排序索引错误
///
/// 正常的界面操作中不会出现，出现即说明调用方有缺陷。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("index {index} out of range for {len} questions")]
    OutOfRange { index: usize, len: usize },
}

/// 保存错误
#[derive(Debug, Error)]
pub enum PersistError {
    /// 没有可用的身份令牌，未发出任何网络请求
    #[error("unauthenticated")]
    Unauthenticated,
    /// 请求失败或服务端返回非成功状态
    #[error("save failed")]
    SaveFailed {
        #[source]
        source: TransportError,
    },
    /// 已有一个保存请求在进行中
    #[error("save already in progress")]
    SaveInProgress,
}

impl PersistError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, PersistError::Unauthenticated)
    }
}

/// 传输层错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    Request {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务端返回非成功状态码
    #[error("服务端返回错误状态 ({endpoint}): {status}")]
    Status { endpoint: String, status: u16 },
    /// 响应体无法解析为 JSON
    #[error("JSON解析失败 ({endpoint}): {source}")]
    InvalidBody {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source,
        })
    }
}

impl TransportError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::Request {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
