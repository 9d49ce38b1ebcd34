// Application layer - Use cases and the ports they depend on
pub mod aggregation_service;
pub mod dashboard_store;
pub mod feed_service;
pub mod geocoder;
pub mod position;
pub mod resolver;
pub mod safety_backend;
pub mod upstream_feeds;
