//! 请求体构建服务 - 业务能力层

use crate::config::{Config, PayloadFormat};
use crate::models::{FormInput, JsonSubmission, MultipartSubmission, SubmissionPayload};

/// 请求体构建服务
///
/// 根据配置的格式把表单转换成 JSON 或 multipart 请求体，
/// 作文与上下文去掉首尾空白后发送
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    format: PayloadFormat,
    send_image_flag: bool,
}

impl PayloadBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            format: config.payload_format,
            send_image_flag: config.send_image_flag,
        }
    }

    pub fn build(&self, form: FormInput) -> SubmissionPayload {
        let use_multipart = match self.format {
            PayloadFormat::Auto => form.has_attachment(),
            PayloadFormat::Json => false,
            PayloadFormat::Multipart => true,
        };

        if use_multipart {
            SubmissionPayload::Multipart(MultipartSubmission {
                essay: form.essay_text.trim().to_string(),
                context: form.context_text.trim().to_string(),
                student_name: form.student_name,
                image: form.image,
            })
        } else {
            let is_from_image = self.send_image_flag.then(|| form.has_attachment());
            SubmissionPayload::Json(JsonSubmission {
                essay: form.essay_text.trim().to_string(),
                context: form.context_text.trim().to_string(),
                is_from_image,
                student_name: form.student_name,
            })
        }
    }
}
