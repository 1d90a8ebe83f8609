use std::collections::BTreeSet;

use crate::models::{Breakdown, Line, SceneRecord};
use crate::parser::classifier::{is_character, is_scene_heading};
use crate::utils::{normalize_line_endings, NUMBER_REGEX};

/// 去掉 `"<数字>. "` 形式的场景编号前缀
pub fn strip_scene_number(text: &str) -> &str {
    match NUMBER_REGEX["scene_number"].find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// 场景标题判定，允许带编号前缀
pub fn is_numbered_scene_heading(line: &Line) -> bool {
    is_scene_heading(line) || is_scene_heading(&Line::new(strip_scene_number(line.trimmed)))
}

/// 去掉角色名后的括号扩展，如 `JOHN (V.O.)` -> `JOHN`
pub fn trim_character_extension(text: &str) -> String {
    NUMBER_REGEX["character_extension"]
        .replace(text, "")
        .trim()
        .to_string()
}

/// 扫描全文，提取场景列表与角色集合
pub fn extract_breakdown(buffer: &str) -> Breakdown {
    let normalized = normalize_line_endings(buffer);
    let mut scenes: Vec<SceneRecord> = Vec::new();
    let mut characters: BTreeSet<String> = BTreeSet::new();

    for raw in normalized.split('\n') {
        let line = Line::new(raw);

        if is_numbered_scene_heading(&line) {
            scenes.push(SceneRecord::new(line.trimmed));
            continue;
        }

        // 第一个场景之前的行不计入任何场景
        if let Some(scene) = scenes.last_mut() {
            scene.length += 1;
        }

        // 按角色规则本身判定，转场行同样满足
        if is_character(&line) {
            let name = trim_character_extension(line.trimmed);
            if !name.is_empty() {
                characters.insert(name);
            }
        }
    }

    log::debug!(
        "拆解完成: {} 个场景, {} 个角色",
        scenes.len(),
        characters.len()
    );

    Breakdown {
        scenes,
        characters: characters.into_iter().collect(),
    }
}
