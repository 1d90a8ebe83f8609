use unicode_segmentation::UnicodeSegmentation;

use crate::models::PrintProfile;

const EPSILON: f64 = 1e-9;

/// 按字素计算等宽宽度
fn width(text: &str) -> usize {
    text.graphemes(true).count()
}

/// 把文本切成空格段与非空格段
fn runs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let is_space = c == ' ';
        if let Some(p) = prev {
            if p != is_space {
                out.push(&text[start..i]);
                start = i;
            }
        }
        prev = Some(is_space);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// 按固定宽度硬切
fn hard_split(text: &str, max: usize) -> Vec<String> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    graphemes.chunks(max).map(|chunk| chunk.concat()).collect()
}

/// 行处理器：把一行文本折成若干可见子行
#[derive(Debug, Clone)]
pub struct Liner {
    /// 每行最多字符数
    pub max_chars: usize,
}

impl Liner {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    /// 由版心宽度和字宽算出每行字符数
    pub fn from_profile(profile: &PrintProfile) -> Self {
        let chars = if profile.font_width > 0.0 {
            ((profile.inner_width() / profile.font_width) + EPSILON).floor()
        } else {
            1.0
        };
        Self::new(chars.max(1.0) as usize)
    }

    /// 折行
    ///
    /// 行首缩进保留，续行沿用同样的缩进；断行处的空格被吃掉，
    /// 比可用宽度还长的单词按字素硬切。缩进本身超宽时整行硬切。
    pub fn wrap_line(&self, line: &str) -> Vec<String> {
        let max = self.max_chars;
        if width(line) <= max {
            return vec![line.to_string()];
        }

        let body = line.trim_start_matches(' ');
        let indent = &line[..line.len() - body.len()];
        if body.is_empty() || indent.len() >= max {
            return hard_split(line, max);
        }

        let avail = max - indent.len();
        let finish = |cur: &str| format!("{}{}", indent, cur.trim_end_matches(' '));
        let mut out = Vec::new();
        let mut cur = String::new();
        let mut cur_w = 0;

        for run in runs(body) {
            let w = width(run);

            if run.starts_with(' ') {
                if cur_w == 0 {
                    continue;
                }
                if cur_w + w <= avail {
                    cur.push_str(run);
                    cur_w += w;
                } else {
                    out.push(finish(cur.as_str()));
                    cur.clear();
                    cur_w = 0;
                }
                continue;
            }

            if cur_w > 0 && cur_w + w > avail {
                out.push(finish(cur.as_str()));
                cur.clear();
                cur_w = 0;
            }

            if cur_w + w <= avail {
                cur.push_str(run);
                cur_w += w;
            } else {
                let graphemes: Vec<&str> = run.graphemes(true).collect();
                let mut chunks = graphemes.chunks(avail).peekable();
                while let Some(chunk) = chunks.next() {
                    if chunks.peek().is_some() {
                        out.push(format!("{}{}", indent, chunk.concat()));
                    } else {
                        cur = chunk.concat();
                        cur_w = chunk.len();
                    }
                }
            }
        }

        if cur_w > 0 {
            out.push(finish(cur.as_str()));
        }
        out
    }
}
