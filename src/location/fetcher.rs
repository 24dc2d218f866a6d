use crate::form::SharedForm;
use crate::location::geofence::Geofence;
use crate::location::provider::PositionProvider;
use crate::notifier::Notifier;
use std::sync::Arc;
use tokio::task::{self, JoinHandle};
use tracing::{error, info, instrument, warn};

pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";

/// Issues a one-shot position request and writes the result into the
/// `latitude` and `longitude` form fields.
///
/// Without a provider the capability is absent: the user is alerted
/// immediately and no request is issued. Otherwise the request runs in a
/// spawned task and this function returns its handle before resolution.
/// Failures leave the fields untouched and terminate at a log entry plus an
/// alert. Requests are not de-duplicated; when several are outstanding the
/// last to resolve wins the final field write.
#[instrument(skip_all)]
pub fn fetch_location(
    provider: Option<Arc<dyn PositionProvider>>,
    form: SharedForm,
    geofence: Option<Geofence>,
    notifier: Arc<dyn Notifier>,
) -> Option<JoinHandle<()>> {
    let Some(provider) = provider else {
        warn!("⚠️ No position provider is configured");
        notifier.alert("Positioning is not supported on this device");
        return None;
    };

    Some(task::spawn(async move {
        info!("📍 Fetching current position...");

        match provider.current_position().await {
            Ok(coordinates) => {
                let mut form = form.write().await;
                form.set_value(LATITUDE_FIELD, coordinates.latitude.to_string());
                form.set_value(LONGITUDE_FIELD, coordinates.longitude.to_string());
                #[rustfmt::skip]
                info!("📍 Fetching current position... OK, {:.4}, {:.4}", coordinates.latitude, coordinates.longitude);

                if let Some(geofence) = geofence {
                    if let Err(err) = geofence.validate(&coordinates) {
                        warn!("⚠️ {}", err);
                        notifier.alert("You appear to be outside the office area");
                    }
                }
            }
            Err(err) => {
                error!("⚠️ Error getting location: {}", err);
                notifier.alert("Could not get your location");
            }
        }
    }))
}
