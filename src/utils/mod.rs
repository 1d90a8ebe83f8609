pub mod screenplay_constants;

pub use screenplay_constants::{Col, ScreenplayConstants, LINE_REGEX, NUMBER_REGEX};

/// 统一换行符为 `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// 制表符展开为固定数量的空格
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    if text.contains('\t') {
        text.replace('\t', &" ".repeat(tab_width))
    } else {
        text.to_string()
    }
}

/// 导出前的行预处理：统一换行、按行切分、展开制表符
pub fn prepare_lines(buffer: &str, tab_width: usize) -> Vec<String> {
    normalize_line_endings(buffer)
        .split('\n')
        .map(|line| expand_tabs(line, tab_width))
        .collect()
}
