//! Scroll positioning for wheel columns.
//!
//! ## Usage
//!
//! The editor never touches rendering primitives. Each wheel is backed by a
//! [`ScrollSurface`] that the rendering side attaches per dimension; the
//! editor only asks it for its viewport extent and requests an offset.
//! [`WheelScroller`] is a ready-made surface for hosts that drive their own
//! frame loop.
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

/// Default extent of one wheel entry, in logical pixels.
pub const DEFAULT_ITEM_EXTENT: f32 = 32.0;

/// Remaining distance below which a smooth scroll snaps to its target.
const SNAP_DISTANCE: f32 = 0.5;

/// Non-finite and negative extents count as empty.
fn sanitize_extent(extent: f32) -> f32 {
    if extent.is_finite() {
        extent.max(0.0)
    } else {
        0.0
    }
}

/// Offset that centers entry `index` in a viewport of `viewport_extent`.
///
/// The result is not clamped; for the first entries it is negative.
pub fn scroll_offset(index: usize, item_extent: f32, viewport_extent: f32) -> f32 {
    index as f32 * item_extent - viewport_extent / 2.0 + item_extent / 2.0
}

/// Scrollable column a wheel is drawn into.
///
/// Requests are fire-and-forget: a later request overrides an earlier one and
/// completion is never reported back.
pub trait ScrollSurface: Send + Sync {
    /// Visible extent of the column along the scroll axis.
    fn viewport_extent(&self) -> f32;

    /// Requests the column to scroll to `offset`.
    fn scroll_to(&self, offset: f32);
}

/// Scroll state of one wheel column.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelScroller {
    /// Current offset (for rendering).
    position: f32,
    /// Offset being scrolled towards.
    target: f32,
    /// Total extent of all entries.
    content_extent: f32,
    /// Visible extent.
    viewport_extent: f32,
    /// Whether requests animate or jump.
    smooth: bool,
    /// Last frame time for delta time calculation.
    last_frame_nanos: Option<u64>,
}

impl WheelScroller {
    /// Creates a scroller over `content_extent` with a visible window of
    /// `viewport_extent`. Non-finite extents are treated as zero.
    pub fn new(content_extent: f32, viewport_extent: f32) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            content_extent: sanitize_extent(content_extent),
            viewport_extent: sanitize_extent(viewport_extent),
            smooth: true,
            last_frame_nanos: None,
        }
    }

    /// Creates a scroller for `count` entries of `item_extent` each.
    pub fn for_items(count: usize, item_extent: f32, viewport_extent: f32) -> Self {
        Self::new(count as f32 * item_extent, viewport_extent)
    }

    /// Sets whether requests animate towards their target.
    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Returns the current offset.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Returns the offset being scrolled towards.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns the visible extent.
    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    /// Updates the visible extent after a layout change. Non-finite extents
    /// are ignored.
    pub fn set_viewport_extent(&mut self, extent: f32) {
        if !extent.is_finite() {
            trace!(extent, "non-finite viewport extent ignored");
            return;
        }
        self.viewport_extent = extent.max(0.0);
        self.target = self.clamp(self.target);
        self.position = self.clamp(self.position);
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Requests a scroll to `offset`, clamped to the scrollable range.
    ///
    /// Replaces any pending target. Without smoothing the position jumps
    /// immediately. Non-finite offsets are ignored.
    pub fn request(&mut self, offset: f32) {
        if !offset.is_finite() {
            trace!(offset, "non-finite scroll request ignored");
            return;
        }
        self.target = self.clamp(offset);
        if !self.smooth {
            self.position = self.target;
        }
        trace!(offset, target = self.target, "wheel scroll requested");
    }

    /// Jumps to `offset` without animation.
    pub fn set_scroll_position(&mut self, offset: f32) {
        if !offset.is_finite() {
            return;
        }
        self.position = self.clamp(offset);
        self.target = self.position;
    }

    /// Returns whether the position has reached the target.
    pub fn is_settled(&self) -> bool {
        self.position == self.target
    }

    /// Advances a smooth scroll by one frame.
    ///
    /// Higher `smoothing` means slower movement. Returns true if the position
    /// changed (needs redraw).
    pub fn update(&mut self, frame_nanos: u64, smoothing: f32) -> bool {
        let delta_time = match self.last_frame_nanos {
            Some(last) => frame_nanos.saturating_sub(last) as f32 / 1_000_000_000.0,
            // assume 60fps for the first frame
            None => 0.016,
        };
        self.last_frame_nanos = Some(frame_nanos);

        let diff = self.target - self.position;
        if diff.abs() < SNAP_DISTANCE {
            let moved = self.position != self.target;
            self.position = self.target;
            return moved;
        }

        let factor = ((1.0 - smoothing) * delta_time * 60.0).min(1.0);
        self.position += diff * factor;
        factor > 0.0
    }
}

/// Scroller shared between the editor and a render loop.
pub type SharedScroller = Arc<RwLock<WheelScroller>>;

impl ScrollSurface for RwLock<WheelScroller> {
    fn viewport_extent(&self) -> f32 {
        self.read().viewport_extent()
    }

    fn scroll_to(&self, offset: f32) {
        self.write().request(offset);
    }
}
