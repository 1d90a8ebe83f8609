use std::fmt;
use std::path::Path;

use crate::api::{export, ExportedFile};
use crate::editor::autosave::Autosaver;
use crate::editor::snippets::Snippet;
use crate::editor::store::{SnapshotStore, StoreResult};
use crate::models::{Conf, ExportFormat};
use crate::parser::number_scenes;

/// 选区，字符下标，`start <= end`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(pos: usize) -> Self {
        Selection { start: pos, end: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// 光标位置（从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}, Col {}", self.line, self.col)
    }
}

/// 编辑会话，独占整个剧本文本
#[derive(Default)]
pub struct Session {
    buffer: String,
    selection: Selection,
    autosaver: Option<Autosaver>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let end = buffer.chars().count();
        Session {
            buffer,
            selection: Selection::caret(end),
            autosaver: None,
        }
    }

    /// 挂上自动保存，之后每次修改都会触发防抖保存
    pub fn attach_autosave(&mut self, autosaver: Autosaver) {
        self.autosaver = Some(autosaver);
    }

    pub fn autosaver(&self) -> Option<&Autosaver> {
        self.autosaver.as_ref()
    }

    pub fn autosaver_mut(&mut self) -> Option<&mut Autosaver> {
        self.autosaver.as_mut()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// 导出时使用的不可变快照
    pub fn snapshot(&self) -> String {
        self.buffer.clone()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.buffer.len())
    }

    /// 设置选区，越界会被截断，起止颠倒会被交换
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (a, b) = (start.min(len), end.min(len));
        self.selection = Selection {
            start: a.min(b),
            end: a.max(b),
        };
    }

    /// 用 `text` 替换当前选区
    ///
    /// 光标移到插入文本末尾；`select` 为真时选中刚插入的文本，便于直接覆盖占位符。
    pub fn insert_at_cursor(&mut self, text: &str, select: bool) {
        let Selection { start, end } = self.selection;
        let (bs, be) = (self.byte_offset(start), self.byte_offset(end));
        self.buffer.replace_range(bs..be, text);

        let pos = start + text.chars().count();
        self.selection = if select {
            Selection { start, end: pos }
        } else {
            Selection::caret(pos)
        };
        self.touch();
    }

    pub fn insert_snippet(&mut self, snippet: Snippet, select: bool) {
        self.insert_at_cursor(&snippet.text(), select);
    }

    /// 按键名插入片段，未知键不做任何事
    pub fn insert_snippet_key(&mut self, key: &str, select: bool) -> bool {
        match Snippet::from_key(key) {
            Some(snippet) => {
                self.insert_snippet(snippet, select);
                true
            }
            None => false,
        }
    }

    /// 整体替换文本（上传文件、恢复自动保存）
    pub fn replace_all(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.selection = Selection::caret(self.char_len());
        self.touch();
    }

    /// 新建：清空文本
    pub fn clear(&mut self) {
        self.replace_all(String::new());
    }

    /// 重新为所有场景标题编号
    pub fn number_scenes(&mut self) {
        let numbered = number_scenes(&self.buffer);
        if numbered != self.buffer {
            self.replace_all(numbered);
        }
    }

    /// 光标所在的行列
    pub fn cursor_position(&self) -> CursorPosition {
        let up_to = &self.buffer[..self.byte_offset(self.selection.start)];
        let line = up_to.matches('\n').count() + 1;
        let last = up_to.rsplit('\n').next().unwrap_or("");
        CursorPosition {
            line,
            col: last.chars().count() + 1,
        }
    }

    /// 从存储中恢复上次自动保存的内容，返回是否恢复成功
    ///
    /// 恢复不会触发新的保存。
    pub fn restore(&mut self, store: &dyn SnapshotStore, key: &str) -> StoreResult<bool> {
        match store.load(key)? {
            Some(text) if !text.is_empty() => {
                self.selection = Selection::caret(text.chars().count());
                self.buffer = text;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// 读取本地文件作为当前文本；读取失败时文本保持不变
    pub async fn load_file(&mut self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        log::info!("已载入文件: {}", path.as_ref().display());
        self.replace_all(text);
        Ok(())
    }

    /// 导出当前文本的快照
    pub fn export(&self, format: ExportFormat, conf: &Conf) -> ExportedFile {
        export(&self.snapshot(), format, conf)
    }

    fn touch(&mut self) {
        if let Some(autosaver) = self.autosaver.as_mut() {
            autosaver.schedule(self.buffer.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_selection() {
        let mut session = Session::with_text("Hello world");
        session.set_selection(6, 11);
        session.insert_at_cursor("there", false);
        assert_eq!(session.text(), "Hello there");
        assert_eq!(session.selection(), Selection::caret(11));
    }

    #[test]
    fn insert_with_select_selects_inserted_text() {
        let mut session = Session::new();
        session.insert_snippet(Snippet::Header, true);
        let sel = session.selection();
        assert_eq!((sel.start, sel.end), (0, "\nINT. LOCATION - DAY\n".len()));
    }

    #[test]
    fn cursor_position_counts_chars() {
        let mut session = Session::with_text("INT. A\nÉLODIE\n");
        session.set_selection(10, 10);
        assert_eq!(session.cursor_position(), CursorPosition { line: 2, col: 4 });
        assert_eq!(session.cursor_position().to_string(), "Line 2, Col 4");
    }

    #[test]
    fn unknown_snippet_is_noop() {
        let mut session = Session::with_text("abc");
        assert!(!session.insert_snippet_key("bogus", false));
        assert_eq!(session.text(), "abc");
    }
}
