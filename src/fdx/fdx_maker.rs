//! FDX 生成模块
//!
//! 每一行源文本生成一个 `Paragraph`，顺序与输入一致，空行也保留（类型为 Action）。

use crate::models::{Conf, Line, ParagraphType};
use crate::parser::classify;
use crate::utils::prepare_lines;

const FDX_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\" ?>\n\
<FinalDraft DocumentType=\"Script\" Template=\"No\" Version=\"1\">\n  <Content>\n";
const FDX_FOOTER: &str = "  </Content>\n</FinalDraft>\n";

/// FDX 段落
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FdxParagraph {
    pub paragraph_type: ParagraphType,
    /// 已展开制表符，未转义
    pub text: String,
}

/// 转义 XML 保留字符
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// 对每一行分类
pub fn build_paragraphs(buffer: &str, config: &Conf) -> Vec<FdxParagraph> {
    prepare_lines(buffer, config.tab_width)
        .into_iter()
        .map(|text| FdxParagraph {
            paragraph_type: classify(&Line::new(&text)),
            text,
        })
        .collect()
}

/// 段落列表序列化为 FDX 文档
pub fn render_fdx(paragraphs: &[FdxParagraph]) -> String {
    let mut xml = String::from(FDX_HEADER);
    for p in paragraphs {
        xml.push_str(&format!(
            "    <Paragraph Type=\"{}\">\n      <Text>{}</Text>\n    </Paragraph>\n",
            p.paragraph_type.fdx_name(),
            escape_xml(&p.text)
        ));
    }
    xml.push_str(FDX_FOOTER);
    xml
}

/// 生成 FDX 文档
pub fn generate_fdx(buffer: &str, config: &Conf) -> String {
    let paragraphs = build_paragraphs(buffer, config);
    log::debug!("FDX 段落数量: {}", paragraphs.len());
    render_fdx(&paragraphs)
}
