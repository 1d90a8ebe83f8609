pub mod models;
pub mod utils;
pub mod parser;
pub mod editor;
pub mod fdx;
pub mod pdf;
pub mod api;

pub use models::{
    Breakdown,
    Conf,
    ConfError,
    ExportFormat,
    Line,
    Margins,
    ParagraphType,
    PrintProfile,
    SceneRecord
};

pub use parser::{
    classify,
    classify_str,
    extract_breakdown,
    number_scenes
};

pub use editor::{
    Autosaver,
    CursorPosition,
    FileStore,
    MemoryStore,
    SaveStatus,
    Selection,
    Session,
    SnapshotStore,
    Snippet,
    StoreError
};

pub use fdx::{generate_fdx, ExportedFile};

pub use pdf::{DrawCommand, LayoutEngine, PageLayout};

pub use api::{
    SimpleConf,
    ExportError,
    ExportResult,
    classify_text,
    layout_pages,
    export,
    write_export,
    export_to_file
};
