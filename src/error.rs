use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 网络与响应错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 表单校验错误
///
/// 在发出任何网络请求之前检测，用户修改后可重新提交
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 作文字数不足
    #[error("作文字数不足: {found}/{required}")]
    InsufficientWords { found: usize, required: usize },
    /// 缺少评分上下文
    #[error("缺少评分上下文")]
    MissingContext,
}

/// 网络请求与响应解析错误
///
/// 对用户而言全部属于传输错误，不再细分
#[derive(Debug, Error)]
pub enum ApiError {
    /// 无法拼接请求地址
    #[error("无效的请求地址 ({base_url} + {endpoint}): {reason}")]
    InvalidUrl {
        base_url: String,
        endpoint: String,
        reason: String,
    },
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 读取响应体失败
    #[error("读取响应失败 ({endpoint}): {source}")]
    BodyReadFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败: {source}")]
    JsonParseFailed {
        #[source]
        source: serde_json::Error,
    },
    /// 响应结构不符合约定
    #[error("响应结构不正确: {reason}")]
    MalformedReply { reason: String },
    /// 附件无法编码为 multipart
    #[error("附件无效 ({file_name}): {source}")]
    InvalidAttachment {
        file_name: String,
        #[source]
        source: reqwest::Error,
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

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 取值不在可选范围内
    #[error("无效的{kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed { source: err })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建响应结构错误
    pub fn malformed_reply(reason: impl Into<String>) -> Self {
        AppError::Api(ApiError::MalformedReply {
            reason: reason.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_api_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Api(ApiError::JsonParseFailed { .. })));

        let err: AppError = ValidationError::MissingContext.into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validation_display() {
        let err = ValidationError::InsufficientWords {
            found: 3,
            required: 20,
        };
        assert_eq!(err.to_string(), "作文字数不足: 3/20");
    }
}
