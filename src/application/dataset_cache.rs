// Dataset cache - One loaded dataset per source, shared read-only across renders
use crate::application::vitals_repository::VitalsRepository;
use crate::domain::error::VitalsError;
use crate::domain::reading::Dataset;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;

struct CachedDataset {
    dataset: Arc<Dataset>,
    modified: Option<SystemTime>,
}

#[derive(Clone)]
pub struct DatasetCache {
    repository: Arc<dyn VitalsRepository>,
    entries: Arc<RwLock<HashMap<String, CachedDataset>>>,
}

impl DatasetCache {
    pub fn new(repository: Arc<dyn VitalsRepository>) -> Self {
        Self {
            repository,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Return the dataset for `source`, loading it on first access or when
    /// the source reports a different modification time. Failures are not cached.
    pub async fn get(&self, source: &str) -> Result<Arc<Dataset>, VitalsError> {
        let modified = self.repository.last_modified(source).await;

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(source) {
                if entry.modified == modified {
                    return Ok(entry.dataset.clone());
                }
                tracing::info!("Source {} changed on disk, reloading", source);
            }
        }

        let dataset = Arc::new(self.repository.load_dataset(source).await?);
        tracing::debug!("Loaded {} readings from {}", dataset.len(), source);

        self.entries.write().await.insert(
            source.to_string(),
            CachedDataset {
                dataset: dataset.clone(),
                modified,
            },
        );

        Ok(dataset)
    }

    /// Drop every cached dataset; the next render reloads from source
    pub async fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        tracing::info!("Dataset cache cleared ({} entries)", dropped);
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::vitals_repository::in_memory::InMemoryRepository;
    use crate::domain::reading::Reading;
    use std::time::Duration;

    fn dataset() -> Dataset {
        Dataset::new(vec![Reading::new("08:00", 72.0, 36.5)])
    }

    #[tokio::test]
    async fn test_second_access_hits_cache() {
        let repo = Arc::new(InMemoryRepository::with_dataset("soldier_data.csv", dataset()));
        let cache = DatasetCache::new(repo.clone());

        let first = cache.get("soldier_data.csv").await.unwrap();
        let second = cache.get("soldier_data.csv").await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(repo.load_count(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let repo = Arc::new(InMemoryRepository::with_dataset("soldier_data.csv", dataset()));
        let cache = DatasetCache::new(repo.clone());

        cache.get("soldier_data.csv").await.unwrap();
        assert_eq!(cache.invalidate_all().await, 1);
        cache.get("soldier_data.csv").await.unwrap();

        assert_eq!(repo.load_count(), 2);
    }

    #[tokio::test]
    async fn test_modification_time_change_reloads() {
        let repo = Arc::new(InMemoryRepository::with_dataset("soldier_data.csv", dataset()));
        let cache = DatasetCache::new(repo.clone());

        repo.touch(SystemTime::UNIX_EPOCH);
        cache.get("soldier_data.csv").await.unwrap();

        repo.put(
            "soldier_data.csv",
            Dataset::new(vec![
                Reading::new("08:00", 72.0, 36.5),
                Reading::new("08:05", 45.0, 34.2),
            ]),
        );
        repo.touch(SystemTime::UNIX_EPOCH + Duration::from_secs(60));

        let reloaded = cache.get("soldier_data.csv").await.unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(repo.load_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let repo = Arc::new(InMemoryRepository::default());
        let cache = DatasetCache::new(repo.clone());

        assert!(matches!(
            cache.get("missing.csv").await,
            Err(VitalsError::DataUnavailable { .. })
        ));

        repo.put("missing.csv", dataset());
        assert!(cache.get("missing.csv").await.is_ok());
    }
}
