//! 用户提示文案
//!
//! 按语言区分的静态文案表，校验失败、服务端错误、传输错误都从这里取

use crate::error::{ConfigError, ValidationError};
use phf::phf_map;
use std::str::FromStr;

/// 提示语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 菲律宾语
    #[default]
    Filipino,
    /// 英语
    English,
}

impl Locale {
    fn catalog(self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            Locale::Filipino => &FILIPINO,
            Locale::English => &ENGLISH,
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fil" | "tl" | "filipino" => Ok(Locale::Filipino),
            "en" | "english" => Ok(Locale::English),
            _ => Err(ConfigError::InvalidValue {
                kind: "语言",
                value: s.to_string(),
            }),
        }
    }
}

static FILIPINO: phf::Map<&'static str, &'static str> = phf_map! {
    "error_prefix" => "Error: ",
    "word_count" => "Ang input na teksto ay dapat magkaroon ng hindi bababa sa {min} salita.",
    "missing_context" => "Please provide context for grading.",
    "transport_failure" => "An error occurred while processing the essay.",
};

static ENGLISH: phf::Map<&'static str, &'static str> = phf_map! {
    "error_prefix" => "Error: ",
    "word_count" => "The essay must contain at least {min} words.",
    "missing_context" => "Please provide context for grading.",
    "transport_failure" => "An error occurred while processing the essay.",
};

/// 文案查询器
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn get(&self, key: &str) -> &'static str {
        self.locale
            .catalog()
            .get(key)
            .or_else(|| ENGLISH.get(key))
            .copied()
            .unwrap_or_default()
    }

    /// 校验失败的提示
    pub fn validation(&self, err: &ValidationError) -> String {
        let body = match err {
            ValidationError::InsufficientWords { required, .. } => self
                .get("word_count")
                .replace("{min}", &required.to_string()),
            ValidationError::MissingContext => self.get("missing_context").to_string(),
        };
        format!("{}{}", self.get("error_prefix"), body)
    }

    /// 服务端返回 error 字段时的提示
    pub fn server_error(&self, error: &str) -> String {
        format!("{}{}", self.get("error_prefix"), error)
    }

    /// 网络或响应解析失败时的通用提示
    pub fn transport_failure(&self) -> String {
        self.get("transport_failure").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_message_is_localized() {
        let err = ValidationError::InsufficientWords {
            found: 5,
            required: 20,
        };
        assert_eq!(
            Messages::new(Locale::Filipino).validation(&err),
            "Error: Ang input na teksto ay dapat magkaroon ng hindi bababa sa 20 salita."
        );
        assert_eq!(
            Messages::new(Locale::English).validation(&err),
            "Error: The essay must contain at least 20 words."
        );
    }

    #[test]
    fn test_context_and_server_messages() {
        let messages = Messages::new(Locale::Filipino);
        assert_eq!(
            messages.validation(&ValidationError::MissingContext),
            "Error: Please provide context for grading."
        );
        assert_eq!(messages.server_error("Invalid context"), "Error: Invalid context");
        assert_eq!(
            messages.transport_failure(),
            "An error occurred while processing the essay."
        );
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("fil".parse::<Locale>().unwrap(), Locale::Filipino);
        assert!("de".parse::<Locale>().is_err());
    }
}
