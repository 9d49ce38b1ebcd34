// Shared dashboard state written by orchestration runs
use crate::domain::dashboard::{ApplyOutcome, DashboardView, RegionUpdate};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

#[derive(Clone, Default)]
pub struct DashboardStore {
    view: Arc<RwLock<DashboardView>>,
    listener: Option<mpsc::UnboundedSender<RegionUpdate>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that also publishes every applied update on a channel.
    pub fn with_listener() -> (Self, mpsc::UnboundedReceiver<RegionUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Self {
            view: Arc::default(),
            listener: Some(tx),
        };
        (store, rx)
    }

    pub fn apply(&self, update: RegionUpdate) -> ApplyOutcome {
        let published = self.listener.as_ref().map(|_| update.clone());
        let outcome = self
            .view
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .apply(update);

        if let (ApplyOutcome::Applied, Some(tx), Some(update)) =
            (outcome, self.listener.as_ref(), published)
        {
            // Receiver gone means nobody is watching
            let _ = tx.send(update);
        }
        outcome
    }

    pub fn snapshot(&self) -> DashboardView {
        self.view
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{Region, RegionContent};

    fn update(run_id: u64) -> RegionUpdate {
        RegionUpdate {
            region: Region::Protocols,
            run_id,
            content: RegionContent::Text(format!("run {}", run_id)),
        }
    }

    #[test]
    fn test_only_applied_updates_are_published() {
        let (store, mut rx) = DashboardStore::with_listener();

        assert_eq!(store.apply(update(2)), ApplyOutcome::Applied);
        assert_eq!(store.apply(update(1)), ApplyOutcome::Superseded);

        assert_eq!(rx.try_recv().unwrap().run_id, 2);
        assert!(rx.try_recv().is_err());
        assert_eq!(store.snapshot().region(Region::Protocols).unwrap().run_id, 2);
    }
}
