// Aggregation service - fans one location out to every dashboard region
use crate::application::dashboard_store::DashboardStore;
use crate::application::safety_backend::SafetyBackend;
use crate::domain::alerts::{render_alerts, render_amber};
use crate::domain::crime::format_crime;
use crate::domain::dashboard::{ApplyOutcome, Region, RegionContent, RegionUpdate};
use crate::domain::location::{describe_fix, LocationFix};
use crate::domain::weather::format_weather;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionOutcome {
    Applied,
    Placeholder,
    /// Result dropped because a later run already wrote the region.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub run_id: u64,
    pub outcomes: Vec<(Region, RegionOutcome)>,
}

impl RunReport {
    /// Regions that fell back to their placeholder.
    pub fn placeholders(&self) -> impl Iterator<Item = Region> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o == RegionOutcome::Placeholder)
            .map(|(r, _)| *r)
    }

    #[cfg(test)]
    pub fn outcome(&self, region: Region) -> Option<RegionOutcome> {
        self.outcomes
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, o)| *o)
    }
}

pub struct AggregationService {
    backend: Arc<dyn SafetyBackend>,
    store: DashboardStore,
    next_run: AtomicU64,
}

impl AggregationService {
    pub fn new(backend: Arc<dyn SafetyBackend>, store: DashboardStore) -> Self {
        Self {
            backend,
            store,
            next_run: AtomicU64::new(0),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    /// Reserve the id for a run at the moment it is triggered. Ids order
    /// runs by trigger time, not by when their location resolved.
    pub fn next_run_id(&self) -> u64 {
        self.next_run.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Refresh every region for one location under `run_id`.
    ///
    /// The coordinates region is written before any request is awaited. The
    /// five fetches then run concurrently on the current task and each one
    /// settles into either its content or its placeholder on its own.
    pub async fn run(&self, run_id: u64, fix: &LocationFix) -> RunReport {
        let coords = fix.coordinates;
        tracing::info!(
            run_id,
            latitude = coords.latitude(),
            longitude = coords.longitude(),
            "starting orchestration run"
        );

        let located = self.settle(
            Region::Coordinates,
            run_id,
            Ok(RegionContent::Text(describe_fix(fix))),
        );

        let backend = &self.backend;
        let (weather, alerts, amber, protocols, crime) = tokio::join!(
            self.refresh(Region::Weather, run_id, async {
                let payload = backend.weather(&coords).await?;
                Ok::<_, anyhow::Error>(RegionContent::Text(format_weather(Some(&payload))))
            }),
            self.refresh(Region::Alerts, run_id, async {
                let payload = backend.alerts(&coords).await?;
                Ok::<_, anyhow::Error>(RegionContent::Items(render_alerts(&payload.alerts)))
            }),
            self.refresh(Region::Amber, run_id, async {
                let payload = backend.amber().await?;
                Ok::<_, anyhow::Error>(RegionContent::Items(render_amber(&payload.items)))
            }),
            self.refresh(Region::Protocols, run_id, async {
                let payload = backend.protocols().await?;
                Ok::<_, anyhow::Error>(RegionContent::Sections(payload.protocols))
            }),
            self.refresh(Region::Crime, run_id, async {
                let payload = backend.crime(&coords).await?;
                Ok::<_, anyhow::Error>(RegionContent::Text(format_crime(Some(&payload))))
            }),
        );

        let report = RunReport {
            run_id,
            outcomes: vec![
                (Region::Coordinates, located),
                (Region::Weather, weather),
                (Region::Alerts, alerts),
                (Region::Amber, amber),
                (Region::Protocols, protocols),
                (Region::Crime, crime),
            ],
        };

        let failed = report.placeholders().count();
        tracing::info!(run_id, failed, "orchestration run finished");

        report
    }

    async fn refresh<F>(&self, region: Region, run_id: u64, fetch: F) -> RegionOutcome
    where
        F: Future<Output = anyhow::Result<RegionContent>>,
    {
        let result = fetch.await;
        self.settle(region, run_id, result)
    }

    fn settle(
        &self,
        region: Region,
        run_id: u64,
        result: anyhow::Result<RegionContent>,
    ) -> RegionOutcome {
        let (content, failed) = match result {
            Ok(content) => (content, false),
            Err(e) => {
                tracing::warn!(?region, run_id, error = ?e, "region fetch failed");
                (RegionContent::placeholder(region), true)
            }
        };

        match self.store.apply(RegionUpdate {
            region,
            run_id,
            content,
        }) {
            ApplyOutcome::Superseded => {
                tracing::debug!(?region, run_id, "discarding stale region update");
                RegionOutcome::Superseded
            }
            ApplyOutcome::Applied if failed => RegionOutcome::Placeholder,
            ApplyOutcome::Applied => RegionOutcome::Applied,
        }
    }
}
