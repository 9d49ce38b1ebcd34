// Domain layer - Location, payload models and pure formatters
pub mod alerts;
pub mod crime;
pub mod crime_rates;
pub mod dashboard;
pub mod location;
pub mod protocols;
pub mod weather;
