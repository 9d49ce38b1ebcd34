// Dashboard domain model - regions and their current content
use super::protocols::ProtocolEntry;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// One independently updated output area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Coordinates,
    Weather,
    Alerts,
    Amber,
    Protocols,
    Crime,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Coordinates,
        Region::Weather,
        Region::Alerts,
        Region::Amber,
        Region::Protocols,
        Region::Crime,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Region::Coordinates => "Location",
            Region::Weather => "Weather",
            Region::Alerts => "Alerts",
            Region::Amber => "AMBER Alerts",
            Region::Protocols => "Emergency Protocols",
            Region::Crime => "Crime Statistics",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Region::Coordinates => "Location unavailable.",
            Region::Weather => "Weather unavailable.",
            Region::Alerts => "Alerts unavailable.",
            Region::Amber => "AMBER alerts unavailable.",
            Region::Protocols => "Protocols unavailable.",
            Region::Crime => "Crime data unavailable.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub text: String,
    pub link: Option<String>,
}

impl ListItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegionContent {
    Text(String),
    Items(Vec<ListItem>),
    Sections(Vec<ProtocolEntry>),
    Placeholder(String),
}

impl RegionContent {
    pub fn placeholder(region: Region) -> Self {
        RegionContent::Placeholder(region.placeholder().to_string())
    }

    #[cfg(test)]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, RegionContent::Placeholder(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionUpdate {
    pub region: Region,
    pub run_id: u64,
    pub content: RegionContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionState {
    pub content: RegionContent,
    pub run_id: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A later run already wrote this region.
    Superseded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    regions: BTreeMap<Region, RegionState>,
}

impl DashboardView {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a region's content unless a newer run has already written it.
    pub fn apply(&mut self, update: RegionUpdate) -> ApplyOutcome {
        if let Some(existing) = self.regions.get(&update.region) {
            if existing.run_id > update.run_id {
                return ApplyOutcome::Superseded;
            }
        }
        self.regions.insert(
            update.region,
            RegionState {
                content: update.content,
                run_id: update.run_id,
                updated_at: Utc::now(),
            },
        );
        ApplyOutcome::Applied
    }

    pub fn region(&self, region: Region) -> Option<&RegionState> {
        self.regions.get(&region)
    }

    #[cfg(test)]
    pub fn content(&self, region: Region) -> Option<&RegionContent> {
        self.regions.get(&region).map(|s| &s.content)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(region: Region, run_id: u64, text: &str) -> RegionUpdate {
        RegionUpdate {
            region,
            run_id,
            content: RegionContent::Text(text.to_string()),
        }
    }

    #[test]
    fn test_apply_replaces_content() {
        let mut view = DashboardView::new();
        assert_eq!(view.apply(update(Region::Weather, 1, "sunny")), ApplyOutcome::Applied);
        assert_eq!(view.apply(update(Region::Weather, 2, "rain")), ApplyOutcome::Applied);
        assert_eq!(
            view.content(Region::Weather),
            Some(&RegionContent::Text("rain".to_string()))
        );
    }

    #[test]
    fn test_stale_run_is_discarded() {
        let mut view = DashboardView::new();
        view.apply(update(Region::Alerts, 5, "newer"));
        assert_eq!(view.apply(update(Region::Alerts, 4, "older")), ApplyOutcome::Superseded);
        assert_eq!(view.region(Region::Alerts).unwrap().run_id, 5);

        // Other regions are tracked independently
        assert_eq!(view.apply(update(Region::Crime, 4, "older")), ApplyOutcome::Applied);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            RegionContent::placeholder(Region::Alerts),
            RegionContent::Placeholder("Alerts unavailable.".to_string())
        );
        assert!(RegionContent::placeholder(Region::Crime).is_placeholder());
    }
}
