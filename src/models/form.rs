/// 上传的图片附件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// 提交时读取到的表单内容
///
/// 只在一次提交周期内存在，发送后即丢弃
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub essay_text: String,
    pub context_text: String,
    pub image: Option<Attachment>,
    pub student_name: Option<String>,
}

impl FormInput {
    pub fn new(essay_text: impl Into<String>, context_text: impl Into<String>) -> Self {
        Self {
            essay_text: essay_text.into(),
            context_text: context_text.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, image: Attachment) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_student_name(mut self, name: impl Into<String>) -> Self {
        self.student_name = Some(name.into());
        self
    }

    /// 是否选择了图片文件（只看是否存在，不看大小）
    pub fn has_attachment(&self) -> bool {
        self.image.is_some()
    }

    /// 作文中以空白分隔的词数
    pub fn word_count(&self) -> usize {
        self.essay_text.split_whitespace().count()
    }
}
