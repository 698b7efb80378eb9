use serde::Deserialize;
use std::fmt;

/// 传输层返回的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 最终 URL（跟随跳转之后）
    pub url: String,
    /// 请求是否经过了跳转
    pub redirected: bool,
    pub body: Vec<u8>,
}

/// 服务端的三种回应
#[derive(Debug, Clone, PartialEq)]
pub enum ServerResponse {
    /// 跳转到新页面
    Redirect { location: String },
    /// 评分结果
    Graded(GradedReply),
    /// 服务端报告的错误
    Rejected { error: String },
}

/// 评分成功时的响应体
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradedReply {
    pub summary: String,
    pub final_grade: GradeValue,
}

impl GradedReply {
    /// 摘要区域的文本
    pub fn summary_text(&self) -> String {
        format!("Summary: {}", self.summary)
    }

    /// 成绩区域的文本
    pub fn grade_text(&self) -> String {
        format!("Final Grade: {}%", self.final_grade)
    }
}

/// 成绩值，服务端可能给数字也可能给字符串
#[derive(Debug, Clone, PartialEq)]
pub enum GradeValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for GradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 的 Display 不带多余的 ".0"，与浏览器拼接字符串一致
            GradeValue::Number(n) => write!(f, "{}", n),
            GradeValue::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for GradeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct GradeVisitor;

        impl<'de> Visitor<'de> for GradeVisitor {
            type Value = GradeValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a string")
            }

            fn visit_str<E>(self, value: &str) -> Result<GradeValue, E>
            where
                E: serde::de::Error,
            {
                Ok(GradeValue::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<GradeValue, E>
            where
                E: serde::de::Error,
            {
                Ok(GradeValue::Text(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<GradeValue, E>
            where
                E: serde::de::Error,
            {
                Ok(GradeValue::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<GradeValue, E>
            where
                E: serde::de::Error,
            {
                Ok(GradeValue::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<GradeValue, E>
            where
                E: serde::de::Error,
            {
                Ok(GradeValue::Number(value))
            }
        }

        deserializer.deserialize_any(GradeVisitor)
    }
}
