//! Window scroll position and height, fed by window listeners in the app
//! root. Height updates are debounced; scroll updates are not.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub scroll_y: f64,
    pub height: f64,
}

impl ViewportState {
    /// Header switches to its compact style past this scroll offset.
    pub const COMPACT_HEADER_AFTER: f64 = 48.0;

    pub fn header_compact(&self) -> bool {
        self.scroll_y > Self::COMPACT_HEADER_AFTER
    }
}
