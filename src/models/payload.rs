use super::form::Attachment;
use serde::Serialize;

/// JSON 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonSubmission {
    pub essay: String,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_from_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
}

/// multipart 请求体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartSubmission {
    pub essay: String,
    pub context: String,
    pub student_name: Option<String>,
    pub image: Option<Attachment>,
}

/// 一次提交的请求体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPayload {
    Json(JsonSubmission),
    Multipart(MultipartSubmission),
}

impl SubmissionPayload {
    /// 用于日志的格式名
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionPayload::Json(_) => "json",
            SubmissionPayload::Multipart(_) => "multipart",
        }
    }
}
