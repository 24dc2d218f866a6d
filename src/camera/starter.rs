use crate::camera::device::VideoDevice;
use crate::camera::surface::DisplaySurface;
use crate::notifier::Notifier;
use std::sync::Arc;
use tokio::task;
use tracing::{error, info, instrument};

/// Opens the device and binds the resulting stream to the surface so the feed
/// renders. Opening is pushed to a blocking task; other work stays responsive
/// while the request is outstanding.
///
/// Every failure (no device, permission denied, backend error) terminates
/// here with a log entry and an alert. The surface is left unbound; nothing
/// propagates to the caller. Concurrent invocations are not de-duplicated.
#[instrument(skip_all)]
pub async fn start_camera(device: Arc<dyn VideoDevice>, surface: &mut DisplaySurface, notifier: &dyn Notifier) {
    info!("🎥 Starting camera...");

    let sink = surface.frame_sink();
    let result = task::spawn_blocking(move || device.open(sink)).await;

    match result {
        Ok(Ok(stream)) => {
            surface.bind(stream);
            info!("🎥 Starting camera... OK");
        }
        Ok(Err(err)) => {
            error!("⚠️ Error accessing camera: {}", err);
            notifier.alert("Could not access the camera");
        }
        Err(err) => {
            error!("⚠️ Camera task failed: {}", err);
            notifier.alert("Could not access the camera");
        }
    }
}
