// Infrastructure layer - External dependencies and adapters
pub mod amber_rss;
pub mod backend_client;
pub mod config;
pub mod device_position;
pub mod http_fetch;
pub mod telemetry;
pub mod upstream_client;
pub mod zip_geocoder;
