use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::editor::store::SnapshotStore;
use crate::models::Conf;

/// 自动保存状态，对应界面上的提示文字
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved { at: DateTime<Local> },
    NotSaved(String),
}

impl SaveStatus {
    pub fn label(&self) -> String {
        match self {
            SaveStatus::Idle => String::new(),
            SaveStatus::Saving => "Saving…".to_string(),
            SaveStatus::Saved { .. } => "Saved".to_string(),
            SaveStatus::NotSaved(_) => "Not saved (storage full?)".to_string(),
        }
    }
}

/// 防抖自动保存
///
/// 每次 `schedule` 都会取消尚未执行的保存任务并重新计时，
/// 连续编辑只会在停顿 `delay` 之后写入一次。需要在 tokio 运行时中调用。
pub struct Autosaver {
    store: Arc<dyn SnapshotStore>,
    key: String,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    status: Arc<watch::Sender<SaveStatus>>,
}

impl Autosaver {
    pub fn new(store: Arc<dyn SnapshotStore>, key: impl Into<String>, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(SaveStatus::Idle);
        Autosaver {
            store,
            key: key.into(),
            delay,
            pending: None,
            status: Arc::new(tx),
        }
    }

    pub fn from_conf(store: Arc<dyn SnapshotStore>, conf: &Conf) -> Self {
        Self::new(
            store,
            conf.autosave_key.clone(),
            Duration::from_millis(conf.autosave_delay_ms),
        )
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> Arc<dyn SnapshotStore> {
        Arc::clone(&self.store)
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> SaveStatus {
        self.status.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().map_or(false, |h| !h.is_finished())
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// 取消待执行的保存，状态从 `Saving` 回到 `Idle`
    pub fn cancel(&mut self) {
        self.abort_pending();
        self.status.send_if_modified(|status| {
            if *status == SaveStatus::Saving {
                *status = SaveStatus::Idle;
                true
            } else {
                false
            }
        });
    }

    /// 安排一次保存，替换掉之前未执行的那次
    pub fn schedule(&mut self, snapshot: String) {
        self.abort_pending();
        self.status.send_replace(SaveStatus::Saving);

        let store = Arc::clone(&self.store);
        let status = Arc::clone(&self.status);
        let key = self.key.clone();
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let size = snapshot.len();
            // 存储实现可能做同步文件读写，放到阻塞线程池
            let saved = tokio::task::spawn_blocking(move || store.save(&key, &snapshot)).await;
            match saved {
                Ok(Ok(())) => {
                    log::debug!("自动保存完成: {} 字节", size);
                    status.send_replace(SaveStatus::Saved { at: Local::now() });
                }
                Ok(Err(e)) => {
                    log::warn!("自动保存失败: {}", e);
                    status.send_replace(SaveStatus::NotSaved(e.to_string()));
                }
                Err(e) => {
                    log::error!("自动保存任务异常: {}", e);
                    status.send_replace(SaveStatus::NotSaved(e.to_string()));
                }
            }
        }));
    }

    /// 等待待执行的保存完成
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}
