//! 响应解析服务 - 业务能力层
//!
//! 把原始响应归类为 跳转 / 评分结果 / 服务端错误

use crate::error::{ApiError, AppError, AppResult};
use crate::models::{GradedReply, RawResponse, ServerResponse};
use serde_json::Value as JsonValue;
use tracing::warn;

/// 解析原始响应
///
/// - 经过跳转：直接返回跳转地址，不解析响应体
/// - 否则按 JSON 解析；`error` 字段为真值时视为服务端错误
/// - 状态码不参与判断，非 2xx 只记日志
pub fn interpret(raw: &RawResponse) -> AppResult<ServerResponse> {
    if raw.redirected {
        return Ok(ServerResponse::Redirect {
            location: raw.url.clone(),
        });
    }

    if !(200..300).contains(&raw.status) {
        warn!("服务端返回状态码 {}，继续按 JSON 解析", raw.status);
    }

    let value: JsonValue = serde_json::from_slice(&raw.body)
        .map_err(|source| ApiError::JsonParseFailed { source })?;

    let JsonValue::Object(ref fields) = value else {
        return Err(AppError::malformed_reply(format!(
            "响应不是 JSON 对象: {}",
            value
        )));
    };

    if let Some(error) = fields.get("error").filter(|v| is_truthy(v)) {
        return Ok(ServerResponse::Rejected {
            error: display_value(error),
        });
    }

    let reply: GradedReply = serde_json::from_value(value)
        .map_err(|e| AppError::malformed_reply(format!("缺少 summary / final_grade: {}", e)))?;

    Ok(ServerResponse::Graded(reply))
}

/// 按浏览器的规则判断真值
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// 字符串原样输出，其余按 JSON 文本输出
fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GradeValue;

    fn raw(body: &str) -> RawResponse {
        RawResponse {
            status: 200,
            url: "http://127.0.0.1:5000/process_essay".to_string(),
            redirected: false,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_graded_reply() {
        let response = interpret(&raw(r#"{"summary":"Good work","final_grade":87}"#)).unwrap();
        assert_eq!(
            response,
            ServerResponse::Graded(GradedReply {
                summary: "Good work".to_string(),
                final_grade: GradeValue::Number(87.0),
            })
        );
    }

    #[test]
    fn test_error_field() {
        let response = interpret(&raw(r#"{"error":"Invalid context"}"#)).unwrap();
        assert_eq!(
            response,
            ServerResponse::Rejected {
                error: "Invalid context".to_string()
            }
        );
    }

    #[test]
    fn test_falsy_error_is_ignored() {
        let response =
            interpret(&raw(r#"{"error":"","summary":"ok","final_grade":"90"}"#)).unwrap();
        assert!(matches!(response, ServerResponse::Graded(_)));

        let response =
            interpret(&raw(r#"{"error":null,"summary":"ok","final_grade":1}"#)).unwrap();
        assert!(matches!(response, ServerResponse::Graded(_)));
    }

    fn assert_rejected(body: &str, expected: &str) {
        assert_eq!(
            interpret(&raw(body)).unwrap(),
            ServerResponse::Rejected {
                error: expected.to_string()
            },
            "body: {}",
            body
        );
    }

    #[test]
    fn test_truthy_error_values_are_rejected() {
        assert_rejected(r#"{"error":true}"#, "true");
        assert_rejected(r#"{"error":500}"#, "500");
        assert_rejected(r#"{"error":-0.5,"summary":"ok","final_grade":1}"#, "-0.5");
        assert_rejected(r#"{"error":{"a":1}}"#, r#"{"a":1}"#);
        assert_rejected(r#"{"error":[],"summary":"ok","final_grade":1}"#, "[]");
    }

    #[test]
    fn test_zero_and_false_error_are_ignored() {
        for body in [
            r#"{"error":0,"summary":"ok","final_grade":70}"#,
            r#"{"error":0.0,"summary":"ok","final_grade":70}"#,
            r#"{"error":false,"summary":"ok","final_grade":70}"#,
        ] {
            let response = interpret(&raw(body)).unwrap();
            assert!(
                matches!(response, ServerResponse::Graded(_)),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_redirect_skips_body() {
        let response = interpret(&RawResponse {
            status: 200,
            url: "/set_criteria".to_string(),
            redirected: true,
            body: b"<html>not json</html>".to_vec(),
        })
        .unwrap();
        assert_eq!(
            response,
            ServerResponse::Redirect {
                location: "/set_criteria".to_string()
            }
        );
    }

    #[test]
    fn test_html_body_is_transport_error() {
        let err = interpret(&raw("<!doctype html><p>results</p>")).unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::JsonParseFailed { .. })));
    }

    #[test]
    fn test_missing_fields_is_malformed() {
        let err = interpret(&raw(r#"{"summary":"only"}"#)).unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::MalformedReply { .. })));

        let err = interpret(&raw("[1,2]")).unwrap_err();
        assert!(matches!(err, AppError::Api(ApiError::MalformedReply { .. })));
    }

    #[test]
    fn test_non_2xx_still_parsed() {
        let mut response = raw(r#"{"error":"Rate limited"}"#);
        response.status = 429;
        assert_eq!(
            interpret(&response).unwrap(),
            ServerResponse::Rejected {
                error: "Rate limited".to_string()
            }
        );
    }
}
