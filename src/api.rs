//! 对外 API
//!
//! 所有导出函数只读取传入文本的快照，不修改它。

use std::path::Path;
use thiserror::Error;

use crate::editor::StoreError;
use crate::fdx::{export_plain, generate_fdx};
use crate::models::{Conf, ConfError, ExportFormat, Line, ParagraphType, PrintProfile};
use crate::parser::{classify, extract_breakdown};
use crate::pdf::{render_pdf, LayoutEngine, PageLayout};
use crate::utils::normalize_line_endings;

pub use crate::fdx::ExportedFile;

/// 导出错误
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("存储错误: {0}")]
    StoreError(#[from] StoreError),

    #[error("配置错误: {0}")]
    ConfError(#[from] ConfError),
}

/// 简化的配置结构，供外部调用
#[derive(Debug, Clone)]
pub struct SimpleConf {
    /// "letter" 或 "a4"
    pub paper_size: String,
    pub tab_width: usize,
    pub autosave_delay_ms: u64,
}

impl Default for SimpleConf {
    fn default() -> Self {
        Self {
            paper_size: "letter".to_string(),
            tab_width: 4,
            autosave_delay_ms: 300,
        }
    }
}

impl From<SimpleConf> for Conf {
    fn from(simple: SimpleConf) -> Self {
        let mut conf = Conf::default();
        conf.print_profile = match simple.paper_size.to_ascii_lowercase().as_str() {
            "a4" => PrintProfile::a4(),
            _ => PrintProfile::letter(),
        };
        conf.tab_width = simple.tab_width;
        conf.autosave_delay_ms = simple.autosave_delay_ms;
        conf
    }
}

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
}

/// 逐行分类
pub fn classify_text(buffer: &str) -> Vec<(String, ParagraphType)> {
    normalize_line_endings(buffer)
        .split('\n')
        .map(|raw| (raw.to_string(), classify(&Line::new(raw))))
        .collect()
}

/// 分页排版
pub fn layout_pages(buffer: &str, config: &Conf) -> PageLayout {
    LayoutEngine::new(config).layout(buffer)
}

/// 按格式在内存中生成完整的导出内容
pub fn export(buffer: &str, format: ExportFormat, config: &Conf) -> ExportedFile {
    log::info!("开始导出: {}", format.file_name());
    match format {
        ExportFormat::Text | ExportFormat::Fountain => export_plain(buffer, format),
        ExportFormat::Fdx => ExportedFile::new(format, generate_fdx(buffer, config).into_bytes()),
        ExportFormat::Pdf => {
            let layout = layout_pages(buffer, config);
            ExportedFile::new(format, render_pdf(&layout, &config.print_profile))
        }
        ExportFormat::Breakdown => {
            let breakdown = extract_breakdown(buffer);
            let json = breakdown
                .to_json_pretty()
                .expect("Breakdown 只含字符串和整数，序列化不会失败");
            ExportedFile::new(format, json.into_bytes())
        }
    }
}

/// 导出到文件：先在内存中生成完整内容，再一次性写入
pub async fn write_export(
    buffer: &str,
    format: ExportFormat,
    output_path: impl AsRef<Path>,
    config: &Conf,
) -> Result<ExportedFile, ExportError> {
    let file = export(buffer, format, config);
    tokio::fs::write(output_path.as_ref(), &file.bytes).await?;
    log::info!(
        "已写入 {} ({} 字节)",
        output_path.as_ref().display(),
        file.bytes.len()
    );
    Ok(file)
}

/// 导出到文件，返回结果描述
pub async fn export_to_file(
    text: String,
    format: ExportFormat,
    output_path: String,
    config: Option<SimpleConf>,
) -> ExportResult {
    let conf: Conf = config.unwrap_or_default().into();

    match write_export(&text, format, &output_path, &conf).await {
        Ok(_) => ExportResult {
            success: true,
            message: format!("{} 导出成功", format.file_name()),
            file_path: Some(output_path),
        },
        Err(e) => {
            log::warn!("导出失败: {}", e);
            ExportResult {
                success: false,
                message: format!("导出失败: {}", e),
                file_path: None,
            }
        }
    }
}
