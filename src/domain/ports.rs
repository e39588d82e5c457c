use crate::domain::model::DispatchOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Dispatcher: Send + Sync + 'static {
    async fn dispatch(&self, url: &str) -> Result<DispatchOutcome>;
}
