// Backend trait for rescue requests
use crate::domain::unit::Unit;
use async_trait::async_trait;

#[async_trait]
pub trait RescueBackend: Send + Sync {
    /// Ask base command to send a rescue team to `unit`; returns once acknowledged
    async fn request_rescue(&self, unit: &Unit) -> anyhow::Result<()>;
}
