use screenplay_writer::editor::{StoreError, StoreResult};
use screenplay_writer::{
    Autosaver, Conf, ExportFormat, FileStore, MemoryStore, SaveStatus, Session, SnapshotStore,
    Snippet,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// 记录写入次数的存储
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    saves: AtomicUsize,
}

impl SnapshotStore for CountingStore {
    fn save(&self, key: &str, text: &str) -> StoreResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(key, text)
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.load(key)
    }
}

/// 写入时等待外部放行的存储，用来确认写入不占用运行时线程
struct GatedStore {
    gate: Mutex<mpsc::Receiver<()>>,
    inner: MemoryStore,
}

impl SnapshotStore for GatedStore {
    fn save(&self, key: &str, text: &str) -> StoreResult<()> {
        let released = self
            .gate
            .lock()
            .unwrap()
            .recv_timeout(Duration::from_secs(5));
        if released.is_err() {
            return Err(StoreError::QuotaExceeded { limit: 0, size: text.len() });
        }
        self.inner.save(key, text)
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.load(key)
    }
}

const KEY: &str = "screenplay:autosave:v1";

#[tokio::test(start_paused = true)]
async fn test_autosave_coalesces_bursts() {
    let store = Arc::new(CountingStore::default());
    let mut session = Session::new();
    session.attach_autosave(Autosaver::new(
        store.clone(),
        KEY,
        Duration::from_millis(300),
    ));

    session.insert_snippet(Snippet::Header, false);
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.insert_snippet(Snippet::Speaker, false);
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.insert_snippet(Snippet::Dialog, false);

    assert_eq!(session.autosaver().unwrap().status(), SaveStatus::Saving);
    assert_eq!(store.saves.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(400)).await;
    session.autosaver_mut().unwrap().flush().await;

    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    assert_eq!(store.load(KEY).unwrap().as_deref(), Some(session.text()));
    assert!(matches!(
        session.autosaver().unwrap().status(),
        SaveStatus::Saved { .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn test_autosave_quota_reports_not_saved() {
    let store = Arc::new(MemoryStore::with_quota(5));
    let mut session = Session::new();
    session.attach_autosave(Autosaver::new(store.clone(), KEY, Duration::from_millis(300)));
    let mut status = session.autosaver().unwrap().subscribe();

    session.insert_at_cursor("This is far too long for the quota", false);
    session.autosaver_mut().unwrap().flush().await;

    status.changed().await.ok();
    let current = status.borrow().clone();
    assert!(matches!(current, SaveStatus::NotSaved(_)));
    assert_eq!(current.label(), "Not saved (storage full?)");
    // 保存失败不影响编辑
    assert_eq!(session.text(), "This is far too long for the quota");
    assert_eq!(store.load(KEY).unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_returns_to_idle() {
    let store = Arc::new(CountingStore::default());
    let mut saver = Autosaver::new(store.clone(), KEY, Duration::from_millis(300));

    saver.schedule("INT. A".to_string());
    assert_eq!(saver.status(), SaveStatus::Saving);
    saver.cancel();
    assert_eq!(saver.status(), SaveStatus::Idle);
    assert_eq!(saver.status().label(), "");

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    assert!(!saver.is_pending());

    // 已完成的保存不会被取消改回 Idle
    saver.schedule("INT. B".to_string());
    saver.flush().await;
    saver.cancel();
    assert!(matches!(saver.status(), SaveStatus::Saved { .. }));
}

#[tokio::test(flavor = "current_thread")]
async fn test_autosave_write_runs_off_runtime_thread() {
    let (release, gate) = mpsc::channel();
    let store = Arc::new(GatedStore {
        gate: Mutex::new(gate),
        inner: MemoryStore::new(),
    });
    let mut saver = Autosaver::new(store.clone(), KEY, Duration::from_millis(10));

    saver.schedule("INT. A".to_string());
    // 写入阻塞期间运行时线程仍能推进计时器
    tokio::time::sleep(Duration::from_millis(100)).await;
    release.send(()).unwrap();
    saver.flush().await;

    assert!(matches!(saver.status(), SaveStatus::Saved { .. }));
    assert_eq!(store.load(KEY).unwrap().as_deref(), Some("INT. A"));
}

#[tokio::test(start_paused = true)]
async fn test_restore_after_autosave() {
    let dir = tempfile::tempdir().unwrap();
    let conf = Conf::default();
    let store: Arc<dyn SnapshotStore> = Arc::new(FileStore::new(dir.path()));

    let mut session = Session::new();
    session.attach_autosave(Autosaver::from_conf(store.clone(), &conf));
    session.insert_snippet(Snippet::Header, false);
    session.autosaver_mut().unwrap().flush().await;

    let mut restored = Session::new();
    assert!(restored.restore(store.as_ref(), &conf.autosave_key).unwrap());
    assert_eq!(restored.text(), "\nINT. LOCATION - DAY\n");
    assert!(!Session::new()
        .restore(&MemoryStore::new(), &conf.autosave_key)
        .unwrap());
}

#[tokio::test]
async fn test_failed_upload_leaves_buffer() {
    let mut session = Session::with_text("INT. KEEP ME");
    let result = session.load_file("tests/test_data/does-not-exist.txt").await;
    assert!(result.is_err());
    assert_eq!(session.text(), "INT. KEEP ME");

    session
        .load_file("tests/test_data/sample.txt")
        .await
        .expect("无法读取测试文件");
    assert!(session.text().contains("INT. KITCHEN - NIGHT"));
}

#[test]
fn test_session_snippets_and_cursor() {
    let mut session = Session::new();
    session.insert_snippet(Snippet::Header, false);
    session.insert_snippet_key("speaker", false);
    session.insert_snippet_key("dialog", true);

    assert_eq!(
        session.text(),
        format!(
            "\nINT. LOCATION - DAY\n\n{}CHARACTER NAME\n\n{}This is a line of dialogue.\n",
            " ".repeat(21),
            " ".repeat(9)
        )
    );
    // 选中了刚插入的对白片段
    let selection = session.selection();
    assert_eq!(
        selection.end - selection.start,
        Snippet::Dialog.text().chars().count()
    );

    // 直接输入覆盖占位符
    session.insert_at_cursor("\n         Hello.\n", false);
    assert!(session.text().ends_with("CHARACTER NAME\n\n         Hello.\n"));
    assert_eq!(session.cursor_position().to_string(), "Line 7, Col 1");
}

#[test]
fn test_session_numbering_and_export() {
    let mut session = Session::with_text("7. INT. A\nBOB\n3. EXT. B\n");
    session.number_scenes();
    assert_eq!(session.text(), "1. INT. A\nBOB\n2. EXT. B\n");

    let file = session.export(ExportFormat::Fountain, &Conf::default());
    assert_eq!(file.bytes, session.text().as_bytes());

    session.clear();
    assert_eq!(session.text(), "");
    assert_eq!(session.cursor_position().to_string(), "Line 1, Col 1");
}

#[test]
fn test_store_error_display() {
    let err = StoreError::QuotaExceeded { limit: 1, size: 2 };
    assert!(err.to_string().contains('2'));
}
