pub mod classifier;
pub mod breakdown;
pub mod scene_numbering;

pub use classifier::{classify, classify_str, Rule, RULES};
pub use breakdown::{extract_breakdown, strip_scene_number, trim_character_extension};
pub use scene_numbering::number_scenes;
