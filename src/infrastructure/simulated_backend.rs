// Simulated rescue backend: acknowledges every request after a fixed delay
use crate::application::rescue_backend::RescueBackend;
use crate::domain::unit::Unit;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SimulatedRescueBackend {
    latency: Duration,
}

impl SimulatedRescueBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl RescueBackend for SimulatedRescueBackend {
    async fn request_rescue(&self, unit: &Unit) -> anyhow::Result<()> {
        tracing::debug!("Contacting base command for {} ({:?} simulated latency)", unit.id, self.latency);
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_waits_for_latency_then_succeeds() {
        let backend = SimulatedRescueBackend::new(Duration::from_millis(30));
        let started = Instant::now();

        backend
            .request_rescue(&Unit::new("Soldier-001", "Alpha"))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
