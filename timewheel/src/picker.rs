//! The complete time wheel control.
//!
//! ## Usage
//!
//! Create a [`TimeWheel`] over the caller-owned committed text, wire user
//! gestures to [`TimeWheel::open`], [`TimeWheel::select`],
//! [`TimeWheel::set_now`], [`TimeWheel::confirm`] and [`TimeWheel::dismiss`],
//! and draw whatever [`TimeWheel::wheels`] describes. Feed every change of
//! the committed text back through [`TimeWheel::set_value`].
use std::{collections::HashMap, sync::Arc};

use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    callback::OnChange,
    clock::{Clock, SystemClock},
    config::{FormatConfig, HourCycle, TimeFormat},
    dimension::{Candidate, Dimension},
    scroll::{DEFAULT_ITEM_EXTENT, ScrollSurface, scroll_offset},
    state::TimeWheelState,
};

/// Configuration options for [`TimeWheel`].
#[derive(Clone, Setters)]
pub struct TimeWheelArgs {
    /// 12 or 24 hour display.
    pub hour_cycle: HourCycle,
    /// `HH:mm` or `HH:mm:ss`.
    pub format: TimeFormat,
    /// Whether the control ignores attempts to open it.
    pub disabled: bool,
    /// Text shown by the trigger when the committed text is empty.
    #[setters(into)]
    pub placeholder: String,
    /// Extent of one wheel entry along the scroll axis.
    pub item_extent: f32,
    /// Whether wheels re-center after every selection instead of only when
    /// the surface opens.
    pub recenter_on_select: bool,
    /// Receives the formatted draft on every selection and on confirm.
    #[setters(skip)]
    pub on_change: OnChange,
    /// Clock read for empty text and for "now".
    #[setters(skip)]
    pub clock: Arc<dyn Clock>,
}

impl Default for TimeWheelArgs {
    fn default() -> Self {
        Self {
            hour_cycle: HourCycle::H24,
            format: TimeFormat::HourMinute,
            disabled: false,
            placeholder: "Select Time".to_string(),
            item_extent: DEFAULT_ITEM_EXTENT,
            recenter_on_select: false,
            on_change: OnChange::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl TimeWheelArgs {
    /// Sets the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change = OnChange::new(on_change);
        self
    }

    /// Sets the change handler using a shared handle.
    pub fn on_change_shared(mut self, on_change: impl Into<OnChange>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Sets the clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns the format configuration these args describe.
    pub fn config(&self) -> FormatConfig {
        FormatConfig::new(self.hour_cycle, self.format)
    }
}

/// One entry of a rendered wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelItem {
    /// Value written into the draft when the entry is clicked.
    pub candidate: Candidate,
    /// Zero-padded label, e.g. `"07"` or `"PM"`.
    pub label: String,
    /// Whether the entry is the draft's current value.
    pub selected: bool,
}

/// Render description of one wheel column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    /// Dimension edited by the column.
    pub dimension: Dimension,
    /// Entries in display order.
    pub items: Vec<WheelItem>,
    /// Index of the draft's current value, used for scrolling.
    pub selected_index: usize,
}

/// Wheels of one control. At most four.
pub type Wheels = SmallVec<[Wheel; 4]>;

/// A time-of-day input with scrollable hour/minute/second/period wheels.
pub struct TimeWheel {
    state: TimeWheelState,
    args: TimeWheelArgs,
    surfaces: HashMap<Dimension, Arc<dyn ScrollSurface>>,
}

impl TimeWheel {
    /// Creates a closed control over the committed text `value`.
    pub fn new(value: impl Into<String>, args: TimeWheelArgs) -> Self {
        let state = TimeWheelState::new(value, args.config(), Arc::clone(&args.clock));
        Self {
            state,
            args,
            surfaces: HashMap::new(),
        }
    }

    /// Returns the editor state.
    pub fn state(&self) -> &TimeWheelState {
        &self.state
    }

    /// Returns the args the control was created with.
    pub fn args(&self) -> &TimeWheelArgs {
        &self.args
    }

    /// Returns the committed text shown by the trigger.
    pub fn display_text(&self) -> &str {
        self.state.committed()
    }

    /// Returns the placeholder shown when the committed text is empty.
    pub fn placeholder(&self) -> &str {
        &self.args.placeholder
    }

    /// Returns whether the editing surface is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.args.disabled
    }

    /// Attaches the scrollable column that draws `dimension`, replacing any
    /// previous one.
    pub fn attach_surface(&mut self, dimension: Dimension, surface: Arc<dyn ScrollSurface>) {
        self.surfaces.insert(dimension, surface);
    }

    /// Detaches the column of `dimension`.
    pub fn detach_surface(&mut self, dimension: Dimension) -> Option<Arc<dyn ScrollSurface>> {
        self.surfaces.remove(&dimension)
    }

    /// Records a change of the caller-owned committed text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.set_committed(value);
    }

    /// Opens the editing surface and scrolls every wheel to its selection.
    ///
    /// Ignored while disabled.
    pub fn open(&mut self) {
        if self.args.disabled {
            debug!("open ignored, time wheel is disabled");
            return;
        }
        self.state.open();
        self.scroll_to_selection();
    }

    /// Follows an open-change request from the surrounding popover.
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.dismiss();
        }
    }

    /// Closes the editing surface without notifying.
    pub fn dismiss(&mut self) {
        self.state.dismiss();
    }

    /// Writes `candidate` into the draft and notifies the caller.
    pub fn select(&mut self, candidate: Candidate) {
        let emitted = self.state.select(candidate);
        self.emit(emitted);
    }

    /// Replaces the draft with the current time and notifies the caller.
    pub fn set_now(&mut self) {
        let emitted = self.state.set_now();
        self.emit(emitted);
    }

    /// Notifies the caller with the draft, then closes the surface.
    pub fn confirm(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.notify(self.state.draft_text());
        self.state.confirm();
    }

    /// Number of wheel columns shown.
    pub fn column_count(&self) -> usize {
        Dimension::active(self.state.config()).len()
    }

    /// Returns the wheel of `dimension`, or `None` if it is not shown.
    pub fn wheel(&self, dimension: Dimension) -> Option<Wheel> {
        let list = self.state.candidates(dimension)?;
        let items = list
            .items
            .iter()
            .enumerate()
            .map(|(index, &candidate)| WheelItem {
                candidate,
                label: candidate.to_string(),
                selected: index == list.selected_index,
            })
            .collect();
        Some(Wheel {
            dimension,
            items,
            selected_index: list.selected_index,
        })
    }

    /// Returns every shown wheel in display order.
    pub fn wheels(&self) -> Wheels {
        Dimension::active(self.state.config())
            .into_iter()
            .filter_map(|dimension| self.wheel(dimension))
            .collect()
    }

    /// Offset that centers the selection of `dimension` in a viewport of
    /// `viewport_extent`, or `None` if the dimension is not shown.
    pub fn scroll_target(&self, dimension: Dimension, viewport_extent: f32) -> Option<f32> {
        let list = self.state.candidates(dimension)?;
        Some(scroll_offset(
            list.selected_index,
            self.args.item_extent,
            viewport_extent,
        ))
    }

    fn scroll_to_selection(&self) {
        for dimension in Dimension::active(self.state.config()) {
            let Some(surface) = self.surfaces.get(&dimension) else {
                continue;
            };
            if let Some(offset) = self.scroll_target(dimension, surface.viewport_extent()) {
                trace!(%dimension, offset, "scrolling wheel to selection");
                surface.scroll_to(offset);
            }
        }
    }

    fn notify(&self, text: String) {
        debug!(%text, "time wheel changed");
        self.args.on_change.call(text);
    }

    fn emit(&self, emitted: Option<String>) {
        let Some(text) = emitted else {
            return;
        };
        self.notify(text);
        if self.args.recenter_on_select && self.state.is_open() {
            self.scroll_to_selection();
        }
    }
}
