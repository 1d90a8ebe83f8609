use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 页面边距 //英寸
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 1.0,
            bottom: 1.0,
            left: 1.5,
            right: 1.0,
        }
    }
}

/// 打印配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintProfile {
    /// 纸张大小
    pub paper_size: String,
    /// 页面宽度 //英寸
    pub page_width: f64,
    /// 页面高度 //英寸
    pub page_height: f64,
    /// 页边距 //英寸
    pub margins: Margins,
    /// 字体大小 //磅
    pub font_size: f64,
    /// 行距倍数
    pub line_leading: f64,
    /// 等宽字体单个字符宽度 //英寸
    pub font_width: f64,
    /// 字体名称
    pub font_family: String,
}

impl Default for PrintProfile {
    fn default() -> Self {
        Self::letter()
    }
}

impl PrintProfile {
    /// 美国 Letter 纸，Courier 12 磅
    pub fn letter() -> Self {
        Self {
            paper_size: "letter".to_string(),
            page_width: 8.5,
            page_height: 11.0,
            margins: Margins::default(),
            font_size: 12.0,
            line_leading: 1.5,
            // Courier 字宽 0.6em，12 磅时为 7.2 磅
            font_width: 0.1,
            font_family: "Courier".to_string(),
        }
    }

    /// A4 纸，其余与 Letter 相同
    pub fn a4() -> Self {
        Self {
            paper_size: "a4".to_string(),
            page_width: 8.27,
            page_height: 11.69,
            ..Self::letter()
        }
    }

    /// 行高 //英寸，字号乘行距再换算
    pub fn line_height(&self) -> f64 {
        convert_point_to_inches(self.font_size * self.line_leading)
    }

    /// 可用宽度 //英寸
    pub fn inner_width(&self) -> f64 {
        self.page_width - self.margins.left - self.margins.right
    }

    /// 版心下沿 //英寸
    pub fn bottom_limit(&self) -> f64 {
        self.page_height - self.margins.bottom
    }
}

/// 将 磅 转为 英寸
pub fn convert_point_to_inches(point: f64) -> f64 {
    point / 72.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 打印配置
    pub print_profile: PrintProfile,
    /// 制表符展开的空格数
    pub tab_width: usize,
    /// 自动保存的存储键
    pub autosave_key: String,
    /// 自动保存防抖延迟 //毫秒
    pub autosave_delay_ms: u64,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            print_profile: PrintProfile::default(),
            tab_width: 4,
            autosave_key: "screenplay:autosave:v1".to_string(),
            autosave_delay_ms: 300,
        }
    }
}

impl Conf {
    /// 从 JSON 文件读取配置，缺省字段使用默认值
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfError> {
        Ok(serde_json::from_str(text)?)
    }
}
