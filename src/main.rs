mod api;
mod chart;
mod column;
mod dashboard;
mod format;
mod history;
mod intent;
mod response;
mod settings;
mod web;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{
    api::{Rotation, ServiceState},
    chart::ChartPlanner,
    history::QueryHistory,
    intent::IntentClassifier,
    settings::{Args, Settings},
    web::Tls,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_file(&args.config)
        .with_context(|| format!("cannot load settings from {}", args.config.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level())
        .init();
    info!("Collections Whisperer {}", env!("CARGO_PKG_VERSION"));

    let state = ServiceState {
        classifier: IntentClassifier::default(),
        planner: ChartPlanner::new(settings.dashboard.label_row_limit),
        rotation: Rotation {
            interval: settings.loading.rotation_interval(),
            enabled: settings.loading.rotate,
        },
        history: RwLock::new(QueryHistory::new(settings.history.limit)),
    };
    if settings.history.limit == 0 {
        warn!("history.limit is 0; no questions will be kept");
    }

    let tls = match (args.cert, args.key) {
        (Some(cert), Some(key)) => Some(Tls { cert, key }),
        _ => None,
    };
    web::serve(api::schema(state), settings.web.address, tls).await;
    Ok(())
}
