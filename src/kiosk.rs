use crate::camera::{DisplaySurface, VideoDevice, start_camera};
use crate::domain::actions::Action;
use crate::form::{SharedForm, validate};
use crate::location::{Geofence, PositionProvider, fetch_location};
use crate::notifier::Notifier;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument};

/// Dispatches incoming actions to the three kiosk operations. The operations
/// are independent; the kiosk only routes and holds their handles.
pub struct Kiosk {
    form: SharedForm,
    device: Arc<dyn VideoDevice>,
    provider: Option<Arc<dyn PositionProvider>>,
    geofence: Option<Geofence>,
    surface: DisplaySurface,
    notifier: Arc<dyn Notifier>,
}

impl Kiosk {
    pub fn new(
        form: SharedForm,
        device: Arc<dyn VideoDevice>,
        provider: Option<Arc<dyn PositionProvider>>,
        geofence: Option<Geofence>,
        surface: DisplaySurface,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Kiosk {
            form,
            device,
            provider,
            geofence,
            surface,
            notifier,
        }
    }

    #[instrument(skip_all)]
    pub async fn listen(&mut self, mut rx: Receiver<Action>) {
        while let Some(action) = rx.recv().await {
            debug!("🔵 Received action: {:?}", action);
            match action {
                Action::StartCamera => {
                    start_camera(self.device.clone(), &mut self.surface, self.notifier.as_ref()).await;
                    if let Some(frame) = self.surface.latest_frame() {
                        debug!("🎥 First frame: {}x{}", frame.width, frame.height);
                    }
                }
                Action::FetchLocation => {
                    // Fire and forget; the task writes into the shared form.
                    let _ = fetch_location(self.provider.clone(), self.form.clone(), self.geofence, self.notifier.clone());
                }
                Action::ValidateForm => {
                    let mut form = self.form.write().await;
                    let is_valid = validate(&mut form);
                    info!("📋 Form is {}", if is_valid { "valid" } else { "invalid" });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraError, Frame, VideoStream};
    use crate::domain::Coordinates;
    use crate::form::{Field, Form};
    use crate::location::{LATITUDE_FIELD, LONGITUDE_FIELD, PositionError};
    use crate::notifier::RecordingNotifier;
    use async_trait::async_trait;
    use crossbeam_channel::Sender;
    use pretty_assertions::assert_eq;
    use tokio::sync::{RwLock, mpsc};
    use tokio::task;

    struct DeniedDevice;

    impl VideoDevice for DeniedDevice {
        fn open(&self, _frames: Sender<Frame>) -> Result<VideoStream, CameraError> {
            Err(CameraError::NoDevice)
        }
    }

    struct FixedProvider;

    #[async_trait]
    impl PositionProvider for FixedProvider {
        async fn current_position(&self) -> Result<Coordinates, PositionError> {
            Ok(Coordinates {
                latitude: 12.5,
                longitude: -34.2,
            })
        }
    }

    #[tokio::test]
    async fn listen_dispatches_actions_until_the_channel_closes() {
        let form = Arc::new(RwLock::new(Form::new(vec![
            Field::required("employee_id"),
            Field::required(LATITUDE_FIELD),
            Field::required(LONGITUDE_FIELD),
        ])));
        form.write().await.set_value("employee_id", "E-1042");

        let notifier = Arc::new(RecordingNotifier::new());
        let mut kiosk = Kiosk::new(
            form.clone(),
            Arc::new(DeniedDevice),
            Some(Arc::new(FixedProvider)),
            None,
            DisplaySurface::new(4),
            notifier.clone(),
        );

        let (tx, rx) = mpsc::channel(4);
        let listener = task::spawn(async move { kiosk.listen(rx).await });

        tx.send(Action::StartCamera).await.unwrap();
        tx.send(Action::FetchLocation).await.unwrap();

        // The fetch task is detached; wait for its write to land.
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(1);
        loop {
            if form.read().await.field(LATITUDE_FIELD).unwrap().value() == "12.5" {
                break;
            }
            assert!(tokio::time::Instant::now() < deadline, "expected the position write within a second");
            tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
        }

        tx.send(Action::ValidateForm).await.unwrap();
        drop(tx);
        listener.await.unwrap();

        let form = form.read().await;
        assert_eq!(form.field(LONGITUDE_FIELD).unwrap().value(), "-34.2");
        assert!(form.fields().all(|field| !field.has_error()));
        assert_eq!(notifier.alerts(), vec!["Could not access the camera".to_string()]);
    }
}
