use crate::camera::frame::Frame;
use crate::camera::stream::VideoStream;
use crossbeam_channel::{Receiver, Sender, bounded};

/// The rendering surface the camera feed is bound to. Owns the bound stream
/// exclusively for its lifetime: binding a new stream stops the previous one,
/// and tearing the surface down stops whatever is bound.
#[derive(Debug)]
pub struct DisplaySurface {
    frames_tx: Sender<Frame>,
    frames_rx: Receiver<Frame>,
    stream: Option<VideoStream>,
}

impl DisplaySurface {
    pub fn new(frame_buffer_size: usize) -> Self {
        let (frames_tx, frames_rx) = bounded(frame_buffer_size);

        DisplaySurface {
            frames_tx,
            frames_rx,
            stream: None,
        }
    }

    /// Sender half handed to the device so capture can feed this surface.
    pub fn frame_sink(&self) -> Sender<Frame> {
        self.frames_tx.clone()
    }

    pub fn bind(&mut self, stream: VideoStream) {
        self.release();
        self.stream = Some(stream);
    }

    pub fn is_bound(&self) -> bool {
        self.stream.is_some()
    }

    /// Stops and discards the bound stream, if any.
    pub fn release(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.stop();
        }
    }

    /// Most recent frame delivered by the bound stream, discarding older ones.
    pub fn latest_frame(&self) -> Option<Frame> {
        self.frames_rx.try_iter().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    fn stream_sending_one_frame(frames: Sender<Frame>, stopped: Arc<AtomicBool>) -> VideoStream {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let handle = thread::spawn(move || {
            let _ = frames.try_send(Frame {
                rgba: vec![0, 0, 0, 255],
                width: 1,
                height: 1,
                timestamp: Instant::now(),
            });

            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(1));
            }
            stopped.store(true, Ordering::SeqCst);
        });

        VideoStream::new(stop, handle)
    }

    #[test]
    fn latest_frame_returns_the_most_recent_delivered_frame() {
        let mut surface = DisplaySurface::new(4);
        let stopped = Arc::new(AtomicBool::new(false));
        surface.bind(stream_sending_one_frame(surface.frame_sink(), stopped));

        let deadline = Instant::now() + Duration::from_secs(1);
        let frame = loop {
            if let Some(frame) = surface.latest_frame() {
                break frame;
            }
            assert!(Instant::now() < deadline, "expected a frame within a second");
            thread::sleep(Duration::from_millis(1));
        };

        assert_eq!((frame.width, frame.height), (1, 1));
    }

    #[test]
    fn binding_a_new_stream_stops_the_previous_one() {
        let mut surface = DisplaySurface::new(4);
        let first_stopped = Arc::new(AtomicBool::new(false));
        surface.bind(stream_sending_one_frame(surface.frame_sink(), first_stopped.clone()));

        let second_stopped = Arc::new(AtomicBool::new(false));
        surface.bind(stream_sending_one_frame(surface.frame_sink(), second_stopped.clone()));

        assert!(first_stopped.load(Ordering::SeqCst));
        assert!(!second_stopped.load(Ordering::SeqCst));
        assert!(surface.is_bound());
    }

    #[test]
    fn release_stops_the_bound_stream() {
        let mut surface = DisplaySurface::new(4);
        let stopped = Arc::new(AtomicBool::new(false));
        surface.bind(stream_sending_one_frame(surface.frame_sink(), stopped.clone()));

        surface.release();

        assert!(stopped.load(Ordering::SeqCst));
        assert!(!surface.is_bound());
    }
}
