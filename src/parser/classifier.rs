use crate::models::{Line, ParagraphType};
use crate::utils::{ScreenplayConstants, LINE_REGEX};

/// 单条判定规则
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&Line) -> bool,
    pub paragraph_type: ParagraphType,
}

/// 按顺序求值，先匹配者胜出；都不匹配则为 Action
pub const RULES: [Rule; 5] = [
    Rule {
        name: "scene_heading",
        matches: is_scene_heading,
        paragraph_type: ParagraphType::SceneHeading,
    },
    Rule {
        name: "transition",
        matches: is_transition,
        paragraph_type: ParagraphType::Transition,
    },
    Rule {
        name: "character",
        matches: is_character,
        paragraph_type: ParagraphType::Character,
    },
    Rule {
        name: "parenthetical",
        matches: is_parenthetical,
        paragraph_type: ParagraphType::Parenthetical,
    },
    Rule {
        name: "dialogue",
        matches: is_dialogue,
        paragraph_type: ParagraphType::Dialogue,
    },
];

/// 以 `INT.` / `EXT.` / `INT/EXT.` 开头（区分大小写）
pub fn is_scene_heading(line: &Line) -> bool {
    LINE_REGEX["scene_heading"].is_match(line.trimmed)
}

pub fn is_transition(line: &Line) -> bool {
    LINE_REGEX["transition"].is_match(line.trimmed)
}

/// 非空、至少一个大写字母、没有小写字母、不超过 30 个字符
pub fn is_character(line: &Line) -> bool {
    let text = line.trimmed;
    !text.is_empty()
        && LINE_REGEX["has_upper"].is_match(text)
        && !LINE_REGEX["has_lower"].is_match(text)
        && text.chars().count() <= ScreenplayConstants::CHARACTER_MAX_LEN
}

pub fn is_parenthetical(line: &Line) -> bool {
    LINE_REGEX["parenthetical"].is_match(line.trimmed)
}

// 空白行一律归为 Action，即使缩进足够
pub fn is_dialogue(line: &Line) -> bool {
    !line.is_blank()
        && line.indent >= ScreenplayConstants::DIALOGUE_MIN_INDENT
        && !LINE_REGEX["sfx"].is_match(line.trimmed)
}

/// 判定一行的段落类型
pub fn classify(line: &Line) -> ParagraphType {
    RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .map(|rule| rule.paragraph_type)
        .unwrap_or(ParagraphType::Action)
}

/// 直接对原始文本判定
pub fn classify_str(raw: &str) -> ParagraphType {
    classify(&Line::new(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["scene_heading", "transition", "character", "parenthetical", "dialogue"]
        );
    }

    #[test]
    fn each_rule_alone() {
        assert!(is_scene_heading(&Line::new("INT/EXT. CAR - NIGHT")));
        assert!(!is_scene_heading(&Line::new("int. house")));
        assert!(is_transition(&Line::new("                 CUT TO:  ")));
        assert!(is_character(&Line::new("JOHN (V.O.)")));
        assert!(!is_character(&Line::new("John")));
        assert!(!is_character(&Line::new("1234")));
        assert!(is_parenthetical(&Line::new("   (beat)")));
        assert!(!is_parenthetical(&Line::new("()")));
        assert!(is_dialogue(&Line::new("         Hello.")));
        assert!(!is_dialogue(&Line::new("            ")));
    }

    #[test]
    fn blank_is_action() {
        assert_eq!(classify_str(""), ParagraphType::Action);
        assert_eq!(classify_str("                    "), ParagraphType::Action);
    }

    #[test]
    fn sfx_is_never_dialogue() {
        assert_eq!(classify_str("          SFX: a door slams"), ParagraphType::Action);
    }
}
