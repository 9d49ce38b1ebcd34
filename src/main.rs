// Main entry point - Dependency injection and command dispatch
mod application;
mod cli;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::Parser;
use futures::StreamExt;
use std::{net::SocketAddr, sync::Arc};
use tokio::io::BufReader;
use tokio::task::JoinSet;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::application::aggregation_service::AggregationService;
use crate::application::dashboard_store::DashboardStore;
use crate::application::feed_service::SafetyFeedService;
use crate::cli::{Cli, Command};
use crate::infrastructure::backend_client::HttpSafetyBackend;
use crate::infrastructure::config::{load_config, load_protocols, AppConfig};
use crate::infrastructure::device_position::ConfiguredPosition;
use crate::infrastructure::http_fetch::HttpFetcher;
use crate::infrastructure::telemetry::init_tracing;
use crate::infrastructure::upstream_client::HttpUpstream;
use crate::infrastructure::zip_geocoder::ZippopotamGeocoder;
use crate::presentation::app_state::AppState;
use crate::presentation::controller::{UiController, UiEvent};
use crate::presentation::input::{command_stream, InputCommand};
use crate::presentation::router::build_router;
use crate::presentation::terminal::{render_dashboard, render_update, TerminalNotifier};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    match cli.command {
        Command::Serve { bind } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(serve(config, bind)),
        // Client commands share one thread; fetches interleave cooperatively
        Command::Watch => client_runtime()?.block_on(watch(config)),
        Command::Locate => client_runtime()?.block_on(run_once(config, UiEvent::Locate)),
        Command::Zip { code } => client_runtime()?.block_on(run_once(config, UiEvent::SubmitZip(code))),
    }
}

fn client_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread().enable_all().build()
}

fn build_controller(config: &AppConfig, store: DashboardStore) -> anyhow::Result<UiController> {
    let fetcher = HttpFetcher::with_timeout(config.backend.timeout())
        .context("Failed to build HTTP client")?;

    // Infrastructure adapters
    let backend = Arc::new(HttpSafetyBackend::new(fetcher.clone(), &config.backend.base_url));
    let geocoder = Arc::new(ZippopotamGeocoder::new(fetcher, &config.geocoder.base_url));
    let position = Arc::new(ConfiguredPosition::new(config.device.clone()));

    // Use cases
    let aggregator = Arc::new(AggregationService::new(backend, store));

    Ok(UiController::new(
        position,
        geocoder,
        aggregator,
        Arc::new(TerminalNotifier),
    ))
}

async fn run_once(config: AppConfig, event: UiEvent) -> anyhow::Result<()> {
    let store = DashboardStore::new();
    let controller = build_controller(&config, store.clone())?;

    match controller.handle(event).await {
        Some(report) => {
            for region in report.placeholders() {
                tracing::warn!(run_id = report.run_id, ?region, "region shows its placeholder");
            }
            print!("{}", render_dashboard(&store.snapshot()));
            Ok(())
        }
        // The user has already been told why
        None => anyhow::bail!("no location resolved"),
    }
}

async fn watch(config: AppConfig) -> anyhow::Result<()> {
    let (store, updates) = DashboardStore::with_listener();
    let controller = build_controller(&config, store)?;

    let printer = tokio::spawn(async move {
        let mut updates = UnboundedReceiverStream::new(updates);
        while let Some(update) = updates.next().await {
            println!("{}", render_update(&update));
        }
    });

    println!("Enter a ZIP code, :locate for this device's position, :quit to exit.");

    let controller = Arc::new(controller);
    let mut runs = JoinSet::new();
    let commands = command_stream(BufReader::new(tokio::io::stdin()));
    tokio::pin!(commands);

    while let Some(command) = commands.next().await {
        match command {
            InputCommand::Quit => break,
            InputCommand::Ui(event) => {
                let controller = controller.clone();
                runs.spawn(async move {
                    controller.handle(event).await;
                });
            }
        }
    }

    while runs.join_next().await.is_some() {}

    // Last sender goes with the controller; the printer then drains and exits
    drop(controller);
    printer.await?;
    Ok(())
}

async fn serve(config: AppConfig, bind: Option<String>) -> anyhow::Result<()> {
    // Create upstream adapters (infrastructure layer)
    let upstream = Arc::new(HttpUpstream::new(config.upstream.clone())?);

    // Create services (application layer)
    let feed_service = SafetyFeedService::new(upstream, load_protocols()?);

    // Build router (presentation layer)
    let router = build_router(Arc::new(AppState { feed_service }));

    let addr: SocketAddr = bind
        .unwrap_or(config.server.bind)
        .parse()
        .context("Invalid bind address")?;
    tracing::info!("Starting safety-dashboard API on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
