//! 表单校验服务 - 业务能力层
//!
//! 只负责"能不能提交"的判断，不发请求、不写页面

use crate::config::Config;
use crate::error::ValidationError;
use crate::models::FormInput;
use tracing::debug;

/// 表单校验服务
///
/// 两条规则相互独立，都通过才允许发请求：
/// - 作文词数不少于 `min_word_count`（上传图片时可跳过）
/// - 评分上下文去掉首尾空白后不能为空
#[derive(Debug, Clone)]
pub struct Validator {
    min_word_count: usize,
    bypass_on_attachment: bool,
}

impl Validator {
    pub fn new(config: &Config) -> Self {
        Self {
            min_word_count: config.min_word_count,
            bypass_on_attachment: config.bypass_validation_on_attachment,
        }
    }

    /// 校验表单，返回第一条不满足的规则
    pub fn validate(&self, form: &FormInput) -> Result<(), ValidationError> {
        self.check_word_count(form)?;
        self.check_context(form)?;
        Ok(())
    }

    fn check_word_count(&self, form: &FormInput) -> Result<(), ValidationError> {
        if self.bypass_on_attachment && form.has_attachment() {
            debug!("已上传图片，跳过词数校验");
            return Ok(());
        }

        let found = form.word_count();
        if found < self.min_word_count {
            return Err(ValidationError::InsufficientWords {
                found,
                required: self.min_word_count,
            });
        }
        Ok(())
    }

    fn check_context(&self, form: &FormInput) -> Result<(), ValidationError> {
        if form.context_text.trim().is_empty() {
            return Err(ValidationError::MissingContext);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;

    fn words(n: usize) -> String {
        vec!["salita"; n].join(" ")
    }

    fn image() -> Attachment {
        Attachment::new("scan.png", "image/png", vec![0x89, 0x50])
    }

    fn validator() -> Validator {
        Validator::new(&Config::default())
    }

    #[test]
    fn test_short_essay_without_image_is_blocked() {
        for n in 0..20 {
            let form = FormInput::new(words(n), "konteksto");
            assert_eq!(
                validator().validate(&form),
                Err(ValidationError::InsufficientWords {
                    found: n,
                    required: 20
                }),
                "essay with {} words",
                n
            );
        }
    }

    #[test]
    fn test_twenty_words_pass() {
        let form = FormInput::new(format!("  {}\n", words(20)), "konteksto");
        assert_eq!(validator().validate(&form), Ok(()));
    }

    #[test]
    fn test_image_bypasses_word_count() {
        let five = words(5);
        for essay in ["", "   ", "isang salita", five.as_str()] {
            let form = FormInput::new(essay, "konteksto").with_image(image());
            assert_eq!(validator().validate(&form), Ok(()));
        }
    }

    #[test]
    fn test_bypass_can_be_disabled() {
        let config = Config {
            bypass_validation_on_attachment: false,
            ..Default::default()
        };
        let form = FormInput::new("", "konteksto").with_image(image());
        assert!(matches!(
            Validator::new(&config).validate(&form),
            Err(ValidationError::InsufficientWords { found: 0, .. })
        ));
    }

    #[test]
    fn test_blank_context_is_blocked() {
        for context in ["", " ", "\n\t  "] {
            let form = FormInput::new(words(30), context);
            assert_eq!(validator().validate(&form), Err(ValidationError::MissingContext));

            let form = FormInput::new("", context).with_image(image());
            assert_eq!(validator().validate(&form), Err(ValidationError::MissingContext));
        }
    }
}
