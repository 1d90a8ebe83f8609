pub mod fdx_maker;
pub mod plain;

pub use fdx_maker::{build_paragraphs, escape_xml, generate_fdx, render_fdx, FdxParagraph};
pub use plain::{export_plain, ExportedFile};
