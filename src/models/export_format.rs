use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Fountain,
    Fdx,
    Pdf,
    Breakdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Fountain => "fountain",
            ExportFormat::Fdx => "fdx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Breakdown => "json",
        }
    }

    /// 建议的下载文件名
    pub fn file_name(&self) -> String {
        match self {
            ExportFormat::Breakdown => "breakdown.json".to_string(),
            _ => format!("script.{}", self.extension()),
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Text | ExportFormat::Fountain => "text/plain",
            ExportFormat::Fdx => "application/xml",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Breakdown => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "fountain" => Ok(ExportFormat::Fountain),
            "fdx" => Ok(ExportFormat::Fdx),
            "pdf" => Ok(ExportFormat::Pdf),
            "breakdown" | "json" => Ok(ExportFormat::Breakdown),
            other => Err(format!("未知的导出格式: {}", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
