use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// 剧本制表位（从 1 开始的字符列）
pub struct Col;

impl Col {
    /// 对白
    pub const DIALOG: usize = 10;
    /// 括号提示
    pub const PAREN: usize = 16;
    /// 角色名
    pub const SPEAKER: usize = 22;
    /// 转场右对齐的目标列
    pub const TRANSITION: usize = 60;
}

pub struct ScreenplayConstants;

impl ScreenplayConstants {
    /// 对白判定所需的最少行首空白
    pub const DIALOGUE_MIN_INDENT: usize = 9;
    /// 角色名最大长度
    pub const CHARACTER_MAX_LEN: usize = 30;

    /// 占位文本
    pub fn placeholders() -> HashMap<&'static str, &'static str> {
        let mut map = HashMap::new();
        map.insert("header", "INT. LOCATION - DAY");
        map.insert("action", "Action line describing what happens.");
        map.insert("speaker", "CHARACTER NAME");
        map.insert("parentheses", "(quietly)");
        map.insert("dialog", "This is a line of dialogue.");
        map.insert("newchar", "NEW CHARACTER");
        map.insert("newchar_paren", "(introducing)");
        map.insert("vfx", "SFX: THUNDER CRACKS.");
        map.insert("fadein", "FADE IN:");
        map.insert("cutto", "CUT TO:");
        map.insert("fadeout", "FADE OUT.");
        map
    }
}

lazy_static! {
    // 段落判定正则，均作用于去掉首尾空白后的文本
    pub static ref LINE_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("scene_heading", Regex::new(r"^(?:INT\.|EXT\.|INT/EXT\.)").unwrap());
        map.insert("transition", Regex::new(r"(?:FADE IN:|FADE OUT\.|CUT TO:)\s*$").unwrap());
        map.insert("has_upper", Regex::new(r"\p{Lu}").unwrap());
        map.insert("has_lower", Regex::new(r"\p{Ll}").unwrap());
        map.insert("parenthetical", Regex::new(r"^\(.+\)$").unwrap());
        map.insert("sfx", Regex::new(r"SFX:").unwrap());
        map
    };

    // 场景编号与角色扩展
    pub static ref NUMBER_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("scene_number", Regex::new(r"^([0-9]+)\. +").unwrap());
        map.insert("character_extension", Regex::new(r"[ \t]*\(.*\)[ \t]*$").unwrap());
        map
    };
}
