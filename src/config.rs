use crate::error::{AppResult, ConfigError};
use crate::messages::Locale;
use std::fmt;
use std::str::FromStr;

/// 提交目标端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// 直接返回摘要与成绩
    ProcessEssay,
    /// 提交后跳转到评分标准页
    SetCriteria,
}

impl Endpoint {
    /// 获取端点路径
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ProcessEssay => "/process_essay",
            Endpoint::SetCriteria => "/set_criteria",
        }
    }
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/') {
            "process_essay" => Ok(Endpoint::ProcessEssay),
            "set_criteria" => Ok(Endpoint::SetCriteria),
            _ => Err(ConfigError::InvalidValue {
                kind: "端点",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// 请求体格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadFormat {
    /// 有附件时用 multipart，否则用 JSON
    #[default]
    Auto,
    /// 始终使用 JSON（附件只体现在 is_from_image 上）
    Json,
    /// 始终使用 multipart
    Multipart,
}

impl FromStr for PayloadFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(PayloadFormat::Auto),
            "json" => Ok(PayloadFormat::Json),
            "multipart" | "form" => Ok(PayloadFormat::Multipart),
            _ => Err(ConfigError::InvalidValue {
                kind: "请求体格式",
                value: s.to_string(),
            }),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 评分服务地址
    pub base_url: String,
    /// 提交端点
    pub endpoint: Endpoint,
    /// 请求体格式
    pub payload_format: PayloadFormat,
    /// 作文最少词数
    pub min_word_count: usize,
    /// 上传了图片时跳过词数校验（由服务端 OCR 提取文本）
    pub bypass_validation_on_attachment: bool,
    /// JSON 请求体中是否携带 is_from_image
    pub send_image_flag: bool,
    /// 提示语言
    pub locale: Locale,
    /// 表单 TOML 文件路径
    pub form_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            endpoint: Endpoint::ProcessEssay,
            payload_format: PayloadFormat::Auto,
            min_word_count: 20,
            bypass_validation_on_attachment: true,
            send_image_flag: true,
            locale: Locale::Filipino,
            form_file: "essay_form.toml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            base_url: std::env::var("GRADER_BASE_URL").unwrap_or(default.base_url),
            endpoint: env_or("SUBMIT_ENDPOINT", "Endpoint", default.endpoint)?,
            payload_format: env_or("PAYLOAD_FORMAT", "PayloadFormat", default.payload_format)?,
            min_word_count: env_or("MIN_WORD_COUNT", "usize", default.min_word_count)?,
            bypass_validation_on_attachment: env_or(
                "BYPASS_ON_ATTACHMENT",
                "bool",
                default.bypass_validation_on_attachment,
            )?,
            send_image_flag: env_or("SEND_IMAGE_FLAG", "bool", default.send_image_flag)?,
            locale: env_or("MESSAGE_LOCALE", "Locale", default.locale)?,
            form_file: std::env::var("FORM_FILE").unwrap_or(default.form_file),
            verbose_logging: env_or("VERBOSE_LOGGING", "bool", default.verbose_logging)?,
        })
    }
}

/// 读取并解析环境变量，未设置时使用默认值
fn env_or<T: FromStr>(var_name: &str, expected_type: &str, default: T) -> AppResult<T> {
    match std::env::var(var_name) {
        Ok(value) => value.parse().map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_parse() {
        assert_eq!("process_essay".parse::<Endpoint>().unwrap(), Endpoint::ProcessEssay);
        assert_eq!("/set_criteria".parse::<Endpoint>().unwrap(), Endpoint::SetCriteria);
        assert!("/scan".parse::<Endpoint>().is_err());
        assert_eq!(Endpoint::SetCriteria.to_string(), "/set_criteria");
    }

    #[test]
    fn test_payload_format_parse() {
        assert_eq!("AUTO".parse::<PayloadFormat>().unwrap(), PayloadFormat::Auto);
        assert_eq!("json".parse::<PayloadFormat>().unwrap(), PayloadFormat::Json);
        assert_eq!("form".parse::<PayloadFormat>().unwrap(), PayloadFormat::Multipart);
        assert!("xml".parse::<PayloadFormat>().is_err());
    }

    #[test]
    fn test_default_matches_canonical_handler() {
        let config = Config::default();
        assert_eq!(config.endpoint, Endpoint::ProcessEssay);
        assert_eq!(config.payload_format, PayloadFormat::Auto);
        assert_eq!(config.min_word_count, 20);
        assert!(config.bypass_validation_on_attachment);
    }

    #[test]
    fn test_env_or_reports_bad_value() {
        std::env::set_var("ESSAY_SUBMIT_TEST_MIN_WORDS", "twenty");
        let result: AppResult<usize> = env_or("ESSAY_SUBMIT_TEST_MIN_WORDS", "usize", 20);
        std::env::remove_var("ESSAY_SUBMIT_TEST_MIN_WORDS");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("ESSAY_SUBMIT_TEST_MIN_WORDS"));
    }

    #[test]
    fn test_from_env_reads_documented_names() {
        let vars = [
            ("GRADER_BASE_URL", "http://grader.local:8080"),
            ("SUBMIT_ENDPOINT", "/set_criteria"),
            ("PAYLOAD_FORMAT", "multipart"),
            ("MIN_WORD_COUNT", "5"),
            ("BYPASS_ON_ATTACHMENT", "false"),
            ("SEND_IMAGE_FLAG", "false"),
            ("MESSAGE_LOCALE", "en"),
            ("FORM_FILE", "sanaysay.toml"),
        ];
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        let result = Config::from_env();
        for (name, _) in vars {
            std::env::remove_var(name);
        }

        let config = result.unwrap();
        assert_eq!(config.base_url, "http://grader.local:8080");
        assert_eq!(config.endpoint, Endpoint::SetCriteria);
        assert_eq!(config.payload_format, PayloadFormat::Multipart);
        assert_eq!(config.min_word_count, 5);
        assert!(!config.bypass_validation_on_attachment);
        assert!(!config.send_image_flag);
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.form_file, "sanaysay.toml");
        assert!(!config.verbose_logging);
    }
}
