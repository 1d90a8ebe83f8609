pub mod liner;
pub mod layout;
pub mod writer;

pub use liner::Liner;
pub use layout::{DrawCommand, LayoutEngine, PageLayout};
pub use writer::render_pdf;
