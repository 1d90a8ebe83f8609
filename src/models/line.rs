use serde::Serialize;

/// 文档中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line<'a> {
    /// 原始文本（不含换行符）
    pub raw: &'a str,
    /// 行首空白字符数
    pub indent: usize,
    /// 去掉首尾空白后的内容
    pub trimmed: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a str) -> Self {
        let body = raw.trim_start();
        Line {
            raw,
            indent: raw[..raw.len() - body.len()].chars().count(),
            trimmed: body.trim_end(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}

impl<'a> From<&'a str> for Line<'a> {
    fn from(raw: &'a str) -> Self {
        Line::new(raw)
    }
}
