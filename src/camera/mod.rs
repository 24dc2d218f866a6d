mod device;
mod frame;
mod starter;
mod stream;
mod surface;

pub use device::{CameraError, NokhwaDevice, VideoDevice};
pub use frame::Frame;
pub use starter::start_camera;
pub use stream::VideoStream;
pub use surface::DisplaySurface;
