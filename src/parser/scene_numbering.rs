use crate::models::Line;
use crate::parser::breakdown::{is_numbered_scene_heading, strip_scene_number};

/// 为所有场景标题重新编号，从 1 开始，旧编号会被替换
///
/// 非场景标题的行保持原样（包括 `\r`）。行首缩进保留。
pub fn number_scenes(buffer: &str) -> String {
    let mut counter = 0usize;

    let lines: Vec<String> = buffer
        .split('\n')
        .map(|raw| {
            let line = Line::new(raw);
            if !is_numbered_scene_heading(&line) {
                return raw.to_string();
            }

            counter += 1;
            let indent_len = raw.len() - raw.trim_start().len();
            let cr = if raw.ends_with('\r') { "\r" } else { "" };
            format!(
                "{}{}. {}{}",
                &raw[..indent_len],
                counter,
                strip_scene_number(line.trimmed),
                cr
            )
        })
        .collect();

    log::debug!("场景编号完成: 共 {} 个场景", counter);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renumbers_in_order() {
        let input = "5. INT. A\naction\n2. EXT. B\n9. INT. C";
        assert_eq!(
            number_scenes(input),
            "1. INT. A\naction\n2. EXT. B\n3. INT. C"
        );
    }

    #[test]
    fn keeps_crlf_and_indent() {
        let input = "  INT. HOUSE\r\nJOHN\r\n";
        assert_eq!(number_scenes(input), "  1. INT. HOUSE\r\nJOHN\r\n");
    }

    #[test]
    fn idempotent() {
        let once = number_scenes("INT. A\n\nEXT. B");
        assert_eq!(number_scenes(&once), once);
    }
}
