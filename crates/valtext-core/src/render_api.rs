use crate::view::ViewId;

/// What a widget needs from the rendering system it lives in.
///
/// Widgets call these when their state changes; the host decides when to
/// run layout and paint.
pub trait RenderHost {
    /// Geometry of `id` may have changed (title slid, error row appeared).
    fn request_layout(&self, id: ViewId);
    /// Something is animating; paint another frame.
    fn request_frame(&self);
}

/// Host that ignores all requests; the default for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl RenderHost for NoopHost {
    fn request_layout(&self, _id: ViewId) {}
    fn request_frame(&self) {}
}
