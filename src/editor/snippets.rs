use crate::utils::{Col, ScreenplayConstants};

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// 换行后补空格，使下一个字符落在第 `target_col` 列（从 1 开始）
pub fn pad_to_column(target_col: usize) -> String {
    format!("\n{}", spaces(target_col.saturating_sub(1)))
}

/// 换行后右对齐到 `target_col`，至少留一个空格，文本转大写
pub fn right_align(text: &str, target_col: usize) -> String {
    let current_len = text.chars().count();
    let pad = target_col.saturating_sub(current_len).max(1);
    format!("\n{}{}", spaces(pad), text.to_uppercase())
}

/// 侧边栏格式化片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    Header,
    Action,
    Speaker,
    Parentheses,
    Dialog,
    NewChar,
    Vfx,
    FadeIn,
    CutTo,
    FadeOut,
}

impl Snippet {
    pub const ALL: [Snippet; 10] = [
        Snippet::Header,
        Snippet::Action,
        Snippet::Speaker,
        Snippet::Parentheses,
        Snippet::Dialog,
        Snippet::NewChar,
        Snippet::Vfx,
        Snippet::FadeIn,
        Snippet::CutTo,
        Snippet::FadeOut,
    ];

    /// 未知的键返回 None（调用方不做任何事）
    pub fn from_key(key: &str) -> Option<Snippet> {
        Snippet::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Ctrl+数字 快捷键
    pub fn from_shortcut(digit: char) -> Option<Snippet> {
        match digit {
            '1' => Some(Snippet::Header),
            '2' => Some(Snippet::Action),
            '3' => Some(Snippet::Speaker),
            '4' => Some(Snippet::Parentheses),
            '5' => Some(Snippet::Dialog),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Snippet::Header => "header",
            Snippet::Action => "action",
            Snippet::Speaker => "speaker",
            Snippet::Parentheses => "parentheses",
            Snippet::Dialog => "dialog",
            Snippet::NewChar => "newchar",
            Snippet::Vfx => "vfx",
            Snippet::FadeIn => "fadein",
            Snippet::CutTo => "cutto",
            Snippet::FadeOut => "fadeout",
        }
    }

    /// 要插入到光标处的文本
    pub fn text(&self) -> String {
        let p = ScreenplayConstants::placeholders();
        match self {
            Snippet::Header | Snippet::Action | Snippet::Vfx => {
                format!("\n{}\n", p[self.key()])
            }
            Snippet::Speaker => format!("{}{}\n", pad_to_column(Col::SPEAKER), p["speaker"]),
            Snippet::Parentheses => {
                format!("{}{}\n", pad_to_column(Col::PAREN), p["parentheses"])
            }
            Snippet::Dialog => format!("{}{}\n", pad_to_column(Col::DIALOG), p["dialog"]),
            Snippet::NewChar => format!(
                "{}{}\n{}{}\n",
                pad_to_column(Col::SPEAKER),
                p["newchar"],
                pad_to_column(Col::PAREN),
                p["newchar_paren"]
            ),
            Snippet::FadeIn | Snippet::CutTo | Snippet::FadeOut => {
                format!("{}\n", right_align(p[self.key()], Col::TRANSITION))
            }
        }
    }
}
