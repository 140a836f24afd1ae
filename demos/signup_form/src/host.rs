use valtext_core::{RenderHost, ViewId};

/// Headless host: records requests in the log instead of scheduling frames.
pub struct LogHost;

impl RenderHost for LogHost {
    fn request_layout(&self, id: ViewId) {
        log::trace!("layout requested for field {id}");
    }

    fn request_frame(&self) {
        log::trace!("frame requested");
    }
}
