use crate::camera::frame::Frame;
use crate::camera::stream::VideoStream;
use crossbeam_channel::Sender;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::{Camera, NokhwaError, query};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;
use thiserror::Error;
use tracing::warn;

/// Seam between the camera starter and the capture backend.
pub trait VideoDevice: Send + Sync {
    /// Opens the device and starts pushing decoded frames into `frames`.
    /// Frames are dropped when the receiving side is not keeping up.
    fn open(&self, frames: Sender<Frame>) -> Result<VideoStream, CameraError>;
}

/// Captures from a local camera through the nokhwa backend.
#[derive(Debug)]
pub struct NokhwaDevice {
    index: u32,
}

impl NokhwaDevice {
    pub fn new(index: u32) -> Self {
        NokhwaDevice { index }
    }
}

fn build_camera(index: u32) -> Result<Camera, NokhwaError> {
    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::None);
    let mut camera = Camera::new(CameraIndex::Index(index), requested)?;
    camera.open_stream()?;
    Ok(camera)
}

impl VideoDevice for NokhwaDevice {
    fn open(&self, frames: Sender<Frame>) -> Result<VideoStream, CameraError> {
        if query(ApiBackend::Auto)?.is_empty() {
            return Err(CameraError::NoDevice);
        }

        // Fail fast before spawning the capture thread.
        build_camera(self.index)?;

        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let index = self.index;

        let handle = thread::spawn(move || {
            let mut camera = match build_camera(index) {
                Ok(camera) => camera,
                Err(err) => {
                    warn!("⚠️ Failed to reopen camera {}: {}", index, err);
                    return;
                }
            };

            while !stop_flag.load(Ordering::Relaxed) {
                let frame = match camera.frame() {
                    Ok(frame) => frame,
                    Err(err) => {
                        warn!("⚠️ Camera frame read failed: {}", err);
                        continue;
                    }
                };

                let decoded = match frame.decode_image::<RgbFormat>() {
                    Ok(image) => image,
                    Err(err) => {
                        warn!("⚠️ Failed to decode camera frame: {}", err);
                        continue;
                    }
                };

                let (width, height) = decoded.dimensions();
                let rgb = decoded.into_raw();
                if rgb.is_empty() {
                    continue;
                }

                // Expand RGB to RGBA for the rendering surface.
                let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
                for chunk in rgb.chunks_exact(3) {
                    rgba.extend_from_slice(&[chunk[0], chunk[1], chunk[2], 255]);
                }

                let _ = frames.try_send(Frame {
                    rgba,
                    width,
                    height,
                    timestamp: Instant::now(),
                });
            }
        });

        Ok(VideoStream::new(stop, handle))
    }
}

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("no camera device is available")]
    NoDevice,
    #[error("camera backend error: {0}")]
    Backend(#[from] NokhwaError),
}
