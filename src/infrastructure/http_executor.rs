//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"发一次 POST"的能力

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{MultipartSubmission, RawResponse, SubmissionPayload};
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::multipart::{Form, Part};
use reqwest::redirect::Policy;
use reqwest::{Client, Url};
use std::sync::Arc;
use tracing::debug;

/// 传输能力
///
/// 控制器只依赖这个 trait，测试可以换成内存实现
#[async_trait]
pub trait Transport: Send + Sync {
    /// 向指定端点发送一次 POST，返回原始响应
    async fn post(&self, endpoint: &str, payload: SubmissionPayload) -> AppResult<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(&self, endpoint: &str, payload: SubmissionPayload) -> AppResult<RawResponse> {
        (**self).post(endpoint, payload).await
    }
}

/// HTTP 执行器
///
/// 职责：
/// - 持有 reqwest Client
/// - 拼接请求地址、编码请求体
/// - 把 3xx + Location 识别为跳转（不自动跟随）
/// - 不认识摘要 / 成绩，不处理业务流程
pub struct HttpExecutor {
    client: Client,
    base_url: Url,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    pub fn new(config: &Config) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            base_url: config.base_url.clone(),
            endpoint: String::new(),
            reason: e.to_string(),
        })?;

        // 不设超时，不重试；跳转交给页面导航，客户端不跟随
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| AppError::api_request_failed(base_url.as_str(), e))?;

        Ok(Self { client, base_url })
    }

    /// 拼接端点地址（`Url::join` 语义，绝对路径会替换 base 的路径）
    pub fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        self.base_url.join(endpoint).map_err(|e| {
            ApiError::InvalidUrl {
                base_url: self.base_url.to_string(),
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl Transport for HttpExecutor {
    async fn post(&self, endpoint: &str, payload: SubmissionPayload) -> AppResult<RawResponse> {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {} ({})", url, payload.kind());

        let request = match payload {
            SubmissionPayload::Json(body) => self.client.post(url.clone()).json(&body),
            SubmissionPayload::Multipart(body) => {
                self.client.post(url.clone()).multipart(build_form(body)?)
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(url.as_str(), e))?;

        let status = response.status();
        if status.is_redirection() {
            if let Some(location) = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
            {
                let target = url
                    .join(location)
                    .map(|u| u.to_string())
                    .unwrap_or_else(|_| location.to_string());
                debug!("响应: status={} 跳转到 {}", status, target);
                return Ok(RawResponse {
                    status: status.as_u16(),
                    url: target,
                    redirected: true,
                    body: Vec::new(),
                });
            }
        }

        let body = response.bytes().await.map_err(|e| ApiError::BodyReadFailed {
            endpoint: url.to_string(),
            source: e,
        })?;

        debug!("响应: status={} body={} 字节", status, body.len());

        Ok(RawResponse {
            status: status.as_u16(),
            url: url.to_string(),
            redirected: false,
            body: body.to_vec(),
        })
    }
}

/// 构建 multipart 表单
fn build_form(body: MultipartSubmission) -> AppResult<Form> {
    let mut form = Form::new()
        .text("essay", body.essay)
        .text("context", body.context);

    if let Some(name) = body.student_name {
        form = form.text("student_name", name);
    }

    if let Some(image) = body.image {
        let file_name = image.file_name.clone();
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| ApiError::InvalidAttachment {
                file_name,
                source: e,
            })?;
        form = form.part("image", part);
    }

    Ok(form)
}
