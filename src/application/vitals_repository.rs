// Repository trait for vital-sign data access
use crate::domain::error::VitalsError;
use crate::domain::reading::Dataset;
use async_trait::async_trait;
use std::time::SystemTime;

#[async_trait]
pub trait VitalsRepository: Send + Sync {
    /// Load every reading from `source`, in file order
    async fn load_dataset(&self, source: &str) -> Result<Dataset, VitalsError>;

    /// Last modification time of `source`, if the backing store tracks one
    async fn last_modified(&self, source: &str) -> Option<SystemTime>;
}
