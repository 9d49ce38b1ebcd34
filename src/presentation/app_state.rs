// Application state for HTTP handlers
use crate::application::feed_service::SafetyFeedService;

#[derive(Clone)]
pub struct AppState {
    pub feed_service: SafetyFeedService,
}
