use serde::Serialize;

use crate::models::ExportFormat;

/// 可下载的导出文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        ExportedFile {
            file_name: format.file_name(),
            media_type: format.media_type().to_string(),
            bytes,
        }
    }

    /// `data:` URL，供浏览器直接下载
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type,
            base64::encode(&self.bytes)
        )
    }
}

/// 纯文本 / Fountain 导出：原样输出，只有文件名不同
///
/// 其他格式按纯文本处理。
pub fn export_plain(buffer: &str, format: ExportFormat) -> ExportedFile {
    let format = match format {
        ExportFormat::Fountain => ExportFormat::Fountain,
        _ => ExportFormat::Text,
    };
    ExportedFile::new(format, buffer.as_bytes().to_vec())
}
