pub mod conf;
pub mod paragraph_type;
pub mod line;
pub mod breakdown;
pub mod export_format;

pub use conf::{Conf, ConfError, Margins, PrintProfile};
pub use paragraph_type::ParagraphType;
pub use line::Line;
pub use breakdown::{Breakdown, SceneRecord};
pub use export_format::ExportFormat;
