use serde::{Deserialize, Serialize};
use std::fmt;

/// 段落类型，每一行恰好对应一种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParagraphType {
    #[serde(rename = "Scene Heading")]
    SceneHeading,
    Transition,
    Character,
    Parenthetical,
    Dialogue,
    Action,
}

impl ParagraphType {
    pub const ALL: [ParagraphType; 6] = [
        ParagraphType::SceneHeading,
        ParagraphType::Transition,
        ParagraphType::Character,
        ParagraphType::Parenthetical,
        ParagraphType::Dialogue,
        ParagraphType::Action,
    ];

    /// FDX 中 `Type` 属性的取值
    pub fn fdx_name(&self) -> &'static str {
        match self {
            ParagraphType::SceneHeading => "Scene Heading",
            ParagraphType::Transition => "Transition",
            ParagraphType::Character => "Character",
            ParagraphType::Parenthetical => "Parenthetical",
            ParagraphType::Dialogue => "Dialogue",
            ParagraphType::Action => "Action",
        }
    }
}

impl fmt::Display for ParagraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fdx_name())
    }
}
