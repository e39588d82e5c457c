use crate::domain::model::{DispatchOutcome, PlayAck};
use crate::domain::ports::{ConfigProvider, Dispatcher};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;

/// 以 reqwest 發送 GET 請求的 `Dispatcher`。
///
/// 不檢查狀態碼，也不要求回應格式；只有傳輸層錯誤才會回傳 `Err`。
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: Client,
}

impl HttpDispatcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Default for HttpDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, url: &str) -> Result<DispatchOutcome> {
        let started = Instant::now();
        tracing::debug!("Making play request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Play response status: {}", status);

        // 回應內容僅供記錄
        let ack = match response.bytes().await {
            Ok(body) => match serde_json::from_slice::<PlayAck>(&body) {
                Ok(ack) => Some(ack.status),
                Err(e) => {
                    tracing::debug!("Reply body is not an ack: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::debug!("Could not read reply body: {}", e);
                None
            }
        };

        Ok(DispatchOutcome {
            url: url.to_string(),
            status: Some(status.as_u16()),
            ack,
            elapsed: started.elapsed(),
        })
    }
}
