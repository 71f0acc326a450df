// Dispatch service - Runs the rescue dispatch sequence for one unit at a time
use crate::application::rescue_backend::RescueBackend;
use crate::domain::dispatch::{DispatchEvent, DispatchPhase};
use crate::domain::error::VitalsError;
use crate::domain::status::AlertStatus;
use crate::domain::unit::Unit;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

struct DispatchRecord {
    last_event: DispatchEvent,
    cancel: Option<CancellationToken>,
}

#[derive(Clone)]
pub struct DispatchService {
    backend: Arc<dyn RescueBackend>,
    timeout: Duration,
    records: Arc<Mutex<HashMap<String, DispatchRecord>>>,
}

impl DispatchService {
    pub fn new(backend: Arc<dyn RescueBackend>, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start a dispatch for `unit`. The receiver yields the `Dispatching`
    /// event followed by exactly one terminal event.
    pub async fn dispatch(
        &self,
        unit: &Unit,
        status: AlertStatus,
    ) -> Result<mpsc::Receiver<DispatchEvent>, VitalsError> {
        if !status.is_critical() {
            return Err(VitalsError::NotCritical(unit.id.clone()));
        }

        let token = CancellationToken::new();
        let started = DispatchEvent::new(
            &unit.id,
            DispatchPhase::Dispatching,
            "Contacting Base Command...".to_string(),
        );

        {
            let mut records = self.records.lock().await;
            if records
                .get(&unit.id)
                .is_some_and(|r| r.last_event.phase.is_in_flight())
            {
                return Err(VitalsError::AlreadyDispatching(unit.id.clone()));
            }
            records.insert(
                unit.id.clone(),
                DispatchRecord {
                    last_event: started.clone(),
                    cancel: Some(token.clone()),
                },
            );
        }

        tracing::info!("Rescue dispatch started for {}", unit.label());

        let (tx, rx) = mpsc::channel(4);
        let _ = tx.send(started).await;

        let backend = self.backend.clone();
        let records = self.records.clone();
        let timeout = self.timeout;
        let unit = unit.clone();

        tokio::spawn(async move {
            let finished = tokio::select! {
                _ = token.cancelled() => DispatchEvent::new(
                    &unit.id,
                    DispatchPhase::Cancelled,
                    format!("Rescue dispatch to {} cancelled", unit.label()),
                ),
                result = tokio::time::timeout(timeout, backend.request_rescue(&unit)) => match result {
                    Ok(Ok(())) => DispatchEvent::new(
                        &unit.id,
                        DispatchPhase::Dispatched,
                        format!("Helicopter dispatched to {} location!", unit.label()),
                    ),
                    Ok(Err(e)) => DispatchEvent::new(
                        &unit.id,
                        DispatchPhase::Failed,
                        format!("Rescue dispatch failed: {}", e),
                    ),
                    Err(_) => DispatchEvent::new(
                        &unit.id,
                        DispatchPhase::TimedOut,
                        format!("Base Command did not respond within {} ms", timeout.as_millis()),
                    ),
                },
            };

            match finished.phase {
                DispatchPhase::Dispatched => tracing::info!("{}", finished.message),
                _ => tracing::warn!("{}", finished.message),
            }

            records.lock().await.insert(
                unit.id.clone(),
                DispatchRecord {
                    last_event: finished.clone(),
                    cancel: None,
                },
            );
            // Caller may have gone away; the dispatch still completes
            let _ = tx.send(finished).await;
        });

        Ok(rx)
    }

    /// Cancel the in-flight dispatch for `unit_id`
    pub async fn cancel(&self, unit_id: &str) -> Result<(), VitalsError> {
        let records = self.records.lock().await;
        match records.get(unit_id).and_then(|r| r.cancel.as_ref()) {
            Some(token) => {
                tracing::info!("Cancelling rescue dispatch for {}", unit_id);
                token.cancel();
                Ok(())
            }
            None => Err(VitalsError::NoDispatchInFlight(unit_id.to_string())),
        }
    }

    /// Most recent event for `unit_id`, or `Idle` if it was never dispatched
    pub async fn status(&self, unit_id: &str) -> DispatchEvent {
        self.records
            .lock()
            .await
            .get(unit_id)
            .map(|r| r.last_event.clone())
            .unwrap_or_else(|| DispatchEvent::idle(unit_id))
    }
}
