use crate::error::{AppError, AppResult, FileError};
use crate::models::form::{Attachment, FormInput};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 表单文件的结构
#[derive(Debug, Deserialize)]
struct FormFile {
    #[serde(default)]
    essay: String,
    #[serde(default)]
    context: String,
    #[serde(default)]
    student_name: Option<String>,
    /// 图片路径，相对于表单文件所在目录
    #[serde(default)]
    image: Option<String>,
}

/// 从 TOML 文件加载表单内容
pub async fn load_form_from_toml(form_file_path: &Path) -> AppResult<FormInput> {
    let path_display = form_file_path.display().to_string();

    if !fs::try_exists(form_file_path).await.unwrap_or(false) {
        return Err(FileError::NotFound { path: path_display }.into());
    }

    let content = fs::read_to_string(form_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let form_file: FormFile = toml::from_str(&content).map_err(|e| FileError::TomlParseFailed {
        path: path_display.clone(),
        source: e,
    })?;

    let mut form = FormInput::new(form_file.essay, form_file.context);
    form.student_name = form_file.student_name.filter(|name| !name.trim().is_empty());

    if let Some(image) = form_file.image.filter(|p| !p.trim().is_empty()) {
        let base_dir = form_file_path.parent().unwrap_or_else(|| Path::new("."));
        let image_path = base_dir.join(&image);
        form.image = Some(load_attachment(&image_path).await?);
    }

    tracing::debug!(
        "已加载表单: {} (图片: {})",
        path_display,
        form.has_attachment()
    );

    Ok(form)
}

/// 读取图片文件作为附件
async fn load_attachment(image_path: &Path) -> AppResult<Attachment> {
    let bytes = fs::read(image_path)
        .await
        .map_err(|e| AppError::file_read_failed(image_path.display().to_string(), e))?;

    let file_name = image_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(Attachment::new(file_name, content_type_for(image_path), bytes))
}

/// 根据扩展名推断 MIME 类型
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
