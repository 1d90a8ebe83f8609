use serde::{Deserialize, Serialize};

/// 场景记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// 场景标题原文（去掉首尾空白）
    pub heading: String,
    /// 场景内的行数，不含标题本身
    pub length: usize,
}

impl SceneRecord {
    pub fn new(heading: impl Into<String>) -> Self {
        SceneRecord {
            heading: heading.into(),
            length: 0,
        }
    }
}

/// 拆解结果：场景列表 + 排序去重后的角色
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub scenes: Vec<SceneRecord>,
    pub characters: Vec<String>,
}

impl Breakdown {
    /// 两空格缩进的 JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
