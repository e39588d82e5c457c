use crate::core::url::request_url;
use crate::domain::model::{Action, PlayRequest};
use crate::domain::ports::{ConfigProvider, Dispatcher};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// 將播放請求送往遠端音樂伺服器。
///
/// 每次呼叫都在 tokio runtime 上產生獨立任務後立即返回；呼叫端可以丟棄
/// `JoinHandle` (不等待) 或 `.await` 它。請求之間沒有順序保證，失敗只會記錄日誌。
/// 必須在 tokio runtime 內呼叫。
pub struct Player<D: Dispatcher, C: ConfigProvider> {
    dispatcher: Arc<D>,
    config: C,
}

impl<D: Dispatcher, C: ConfigProvider> Player<D, C> {
    pub fn new(dispatcher: D, config: C) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            config,
        }
    }

    pub fn url_for(&self, request: &PlayRequest) -> String {
        request_url(self.config.base_url(), request)
    }

    pub fn play_chord(&self, chord: &str) -> JoinHandle<()> {
        self.play(PlayRequest::chord(chord))
    }

    pub fn play_note(&self, note: &str) -> JoinHandle<()> {
        self.play(PlayRequest::note(note))
    }

    pub fn play(&self, request: PlayRequest) -> JoinHandle<()> {
        let url = self.url_for(&request);
        match request.action {
            Action::PlayChord => tracing::info!("🎵 {}", url),
            Action::PlayNote => tracing::debug!("🎵 {}", url),
        }

        let dispatcher = Arc::clone(&self.dispatcher);
        tokio::spawn(async move {
            match dispatcher.dispatch(&url).await {
                Ok(outcome) => {
                    tracing::info!(
                        "✅ {} -> status={:?} ack={:?} ({:?})",
                        outcome.url,
                        outcome.status,
                        outcome.ack,
                        outcome.elapsed
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Play request to {} failed: {} (Category: {:?})",
                        url,
                        e,
                        e.category()
                    );
                    tracing::debug!("💡 {}", e.recovery_suggestion());
                }
            }
        })
    }
}
