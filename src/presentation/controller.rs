// UI event bindings - locate action and ZIP submission
use crate::application::aggregation_service::{AggregationService, RunReport};
use crate::application::geocoder::ZipGeocoder;
use crate::application::position::PositionSource;
use crate::application::resolver::{CoordinateProvider, DeviceLocation, ZipLookup};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Use my location"
    Locate,
    SubmitZip(String),
    /// Key pressed while the ZIP input has focus.
    KeyPress { key: Key, input: String },
}

/// Blocking, user-facing notification.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

pub struct UiController {
    position: Arc<dyn PositionSource>,
    geocoder: Arc<dyn ZipGeocoder>,
    aggregator: Arc<AggregationService>,
    notifier: Arc<dyn Notifier>,
}

impl UiController {
    pub fn new(
        position: Arc<dyn PositionSource>,
        geocoder: Arc<dyn ZipGeocoder>,
        aggregator: Arc<AggregationService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            position,
            geocoder,
            aggregator,
            notifier,
        }
    }

    /// Resolve a location for the event and refresh the dashboard. Resolver
    /// failures are reported to the user and the run is not started.
    ///
    /// The run id is taken before resolving, so a slow lookup cannot
    /// overwrite the results of an action triggered after it.
    pub async fn handle(&self, event: UiEvent) -> Option<RunReport> {
        let provider: Box<dyn CoordinateProvider> = match event {
            UiEvent::Locate => Box::new(DeviceLocation::new(self.position.clone())),
            UiEvent::SubmitZip(input)
            | UiEvent::KeyPress {
                key: Key::Enter,
                input,
            } => Box::new(ZipLookup::new(self.geocoder.clone(), input)),
            UiEvent::KeyPress { .. } => return None,
        };

        let run_id = self.aggregator.next_run_id();
        match provider.resolve().await {
            Ok(fix) => Some(self.aggregator.run(run_id, &fix).await),
            Err(e) => {
                tracing::info!(run_id, error = %e, "location request aborted");
                self.notifier.notify(&e.to_string());
                None
            }
        }
    }
}
