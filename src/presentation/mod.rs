// Presentation layer - HTTP API, terminal view and user input bindings
pub mod app_state;
pub mod controller;
pub mod handlers;
pub mod input;
pub mod router;
pub mod terminal;
