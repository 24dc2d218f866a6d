use crate::app_config::AppConfig;
use crate::camera::{DisplaySurface, NokhwaDevice};
use crate::domain::actions::Action;
use crate::form::Form;
use crate::kiosk::Kiosk;
use crate::location::{Geofence, HttpPositionProvider, PositionProvider};
use crate::notifier::ConsoleNotifier;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};
use tokio::task;
use tracing::info;

mod app_config;
mod camera;
mod domain;
mod form;
mod kiosk;
mod location;
mod notifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let form = Arc::new(RwLock::new(Form::from_config(config.form())));
    let surface = DisplaySurface::new(config.camera().frame_buffer_size());
    let device = Arc::new(NokhwaDevice::new(config.camera().device_index()));
    let provider = HttpPositionProvider::from_config(reqwest::Client::new(), &config).map(|provider| Arc::new(provider) as Arc<dyn PositionProvider>);
    let geofence = config.geofence().map(Geofence::from_config);

    let (tx, rx) = mpsc::channel::<Action>(config.core().action_buffer_size());
    let mut kiosk = Kiosk::new(form, device, provider, geofence, surface, Arc::new(ConsoleNotifier));

    let listener = task::spawn(async move {
        kiosk.listen(rx).await;
    });
    info!("✅  Initialized kiosk");

    // Kiosk boot sequence; further actions come from whoever holds the sender.
    tx.send(Action::StartCamera).await?;
    tx.send(Action::FetchLocation).await?;

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down");

    drop(tx);
    listener.await?;

    Ok(())
}
