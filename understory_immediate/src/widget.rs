// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget kinds and their interaction effects.
//!
//! [`Widget`] is a closed set of kinds. Each variant borrows the application state it
//! edits for the duration of one declaration, and [`Widget::interact`] is the single
//! dispatch point that runs the shared hot/active update and then applies the
//! kind-specific effect:
//!
//! | kind                           | on activation / while active                  |
//! |--------------------------------|-----------------------------------------------|
//! | [`Button`](Widget::Button), [`TextEdit`](Widget::TextEdit), [`ColorPicker`](Widget::ColorPicker) | reports `clicked` |
//! | [`Checkbox`](Widget::Checkbox), [`SelectableLabel`](Widget::SelectableLabel) | toggles the bound `bool` |
//! | [`RadioButton`](Widget::RadioButton) | stores its value in the bound `usize` |
//! | [`ComboBox`](Widget::ComboBox) | advances to the next option, wrapping         |
//! | [`Slider`](Widget::Slider)     | while active, follows the pointer's x         |
//!
//! [`Label`](Widget::Label), [`ProgressBar`](Widget::ProgressBar) and [`Image`](Widget::Image)
//! are display-only: they never touch the hot/active state and so never steal hover
//! from an interactive widget underneath.

use core::fmt;
use core::hash::Hash;

use peniko::Color;

use crate::frame::{Frame, FrameError};
use crate::hit::HitRegion;

/// A widget declaration for one frame.
#[derive(Debug)]
pub enum Widget<'t, 'v> {
    /// Static text.
    Label {
        /// Text to display.
        text: &'t str,
    },
    /// A push button.
    Button {
        /// Button caption.
        text: &'t str,
    },
    /// A single-line text field. Clicking it reports `clicked`, which the
    /// application can treat as a focus request.
    TextEdit {
        /// Hint shown while `text` is empty.
        placeholder: &'t str,
        /// Current contents.
        text: &'t str,
    },
    /// A checkbox bound to a `bool`.
    Checkbox {
        /// Caption next to the box.
        label: &'t str,
        /// Checked state, toggled on activation.
        checked: &'v mut bool,
    },
    /// One option of a radio group bound to a shared `usize`.
    RadioButton {
        /// Caption next to the button.
        label: &'t str,
        /// The value this button stands for.
        value: usize,
        /// The group's current value, set to `value` on activation.
        current: &'v mut usize,
    },
    /// A label that can be toggled on and off.
    SelectableLabel {
        /// Text to display.
        label: &'t str,
        /// Selection state, toggled on activation.
        selected: &'v mut bool,
    },
    /// A drop-down with a fixed list of options.
    ComboBox {
        /// Available options.
        options: &'t [&'t str],
        /// Index of the selected option, advanced on activation.
        selected: &'v mut usize,
    },
    /// A horizontal slider over an inclusive integer range.
    Slider {
        /// Value at the left edge.
        min: i32,
        /// Value at the right edge.
        max: i32,
        /// Current value, updated from the pointer while the slider is active.
        value: &'v mut i32,
    },
    /// A progress indicator.
    ProgressBar {
        /// Completion, clamped to `0..=100` when displayed.
        percent: u8,
    },
    /// A color swatch that reports `clicked` so the application can open a picker.
    ColorPicker {
        /// Current color.
        color: Color,
    },
    /// A static image.
    Image {
        /// Image source, interpreted by the renderer.
        source: &'t str,
    },
}

/// Result of declaring one widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Response<K> {
    /// The widget's id.
    pub id: K,
    /// The widget was activated (pressed and released over it) this frame.
    pub clicked: bool,
    /// The widget changed the application state it is bound to.
    pub changed: bool,
    /// The widget was hot right after it was processed.
    ///
    /// An overlapping widget declared later in the same frame can still take over.
    pub hot: bool,
    /// The widget was active right after it was processed.
    pub active: bool,
}

impl<K> Response<K> {
    fn inert(id: K) -> Self {
        Self {
            id,
            clicked: false,
            changed: false,
            hot: false,
            active: false,
        }
    }
}

/// Snapshot of what a widget looks like, recorded after it was processed.
#[derive(Copy, Clone, Debug)]
pub enum Visual<'t> {
    /// See [`Widget::Label`].
    Label {
        /// Text to display.
        text: &'t str,
    },
    /// See [`Widget::Button`].
    Button {
        /// Button caption.
        text: &'t str,
    },
    /// See [`Widget::TextEdit`].
    TextEdit {
        /// Hint shown while `text` is empty.
        placeholder: &'t str,
        /// Current contents.
        text: &'t str,
    },
    /// See [`Widget::Checkbox`].
    Checkbox {
        /// Caption next to the box.
        label: &'t str,
        /// Checked state.
        checked: bool,
    },
    /// See [`Widget::RadioButton`].
    RadioButton {
        /// Caption next to the button.
        label: &'t str,
        /// Whether this option is the group's current value.
        selected: bool,
    },
    /// See [`Widget::SelectableLabel`].
    SelectableLabel {
        /// Text to display.
        label: &'t str,
        /// Selection state.
        selected: bool,
    },
    /// See [`Widget::ComboBox`].
    ComboBox {
        /// Available options.
        options: &'t [&'t str],
        /// Index of the selected option.
        selected: usize,
    },
    /// See [`Widget::Slider`].
    Slider {
        /// Value at the left edge.
        min: i32,
        /// Value at the right edge.
        max: i32,
        /// Current value.
        value: i32,
    },
    /// See [`Widget::ProgressBar`].
    ProgressBar {
        /// Completion in `0..=100`.
        percent: u8,
    },
    /// See [`Widget::ColorPicker`].
    ColorPicker {
        /// Current color.
        color: Color,
    },
    /// See [`Widget::Image`].
    Image {
        /// Image source.
        source: &'t str,
    },
}

impl<'t> Widget<'t, '_> {
    /// Returns `true` for kinds that take part in hot/active tracking.
    pub fn is_interactive(&self) -> bool {
        !matches!(
            self,
            Self::Label { .. } | Self::ProgressBar { .. } | Self::Image { .. }
        )
    }

    /// Process this widget in `frame` and apply its kind-specific effect.
    ///
    /// Display-only kinds return an inert [`Response`] without touching the frame.
    pub fn interact<K: Copy + Eq + Hash + fmt::Debug>(
        &mut self,
        frame: &mut Frame<'_, K>,
        id: K,
        region: HitRegion,
    ) -> Result<Response<K>, FrameError<K>> {
        if !self.is_interactive() {
            return Ok(Response::inert(id));
        }

        let clicked = frame.widget(id, region)?;
        let active = frame.state().is_active(id);
        let changed = match self {
            Self::Checkbox { checked: flag, .. } | Self::SelectableLabel { selected: flag, .. } => {
                if clicked {
                    **flag = !**flag;
                }
                clicked
            }
            Self::RadioButton { value, current, .. } => {
                let changed = clicked && **current != *value;
                if changed {
                    **current = *value;
                }
                changed
            }
            Self::ComboBox { options, selected } => {
                let changed = clicked && !options.is_empty();
                if changed {
                    **selected = selected.saturating_add(1) % options.len();
                }
                changed
            }
            Self::Slider { min, max, value } => {
                let next = slider_value(region, frame.sample().position.x, *min, *max);
                let changed = active && **value != next;
                if changed {
                    **value = next;
                }
                changed
            }
            Self::Button { .. }
            | Self::TextEdit { .. }
            | Self::ColorPicker { .. }
            | Self::Label { .. }
            | Self::ProgressBar { .. }
            | Self::Image { .. } => false,
        };
        if changed {
            tracing::debug!(widget = ?id, "value changed");
        }

        Ok(Response {
            id,
            clicked,
            changed,
            hot: frame.state().is_hot(id),
            active,
        })
    }

    /// Snapshot the widget's current appearance.
    pub fn visual(&self) -> Visual<'t> {
        match *self {
            Self::Label { text } => Visual::Label { text },
            Self::Button { text } => Visual::Button { text },
            Self::TextEdit { placeholder, text } => Visual::TextEdit { placeholder, text },
            Self::Checkbox { label, ref checked } => Visual::Checkbox {
                label,
                checked: **checked,
            },
            Self::RadioButton {
                label,
                value,
                ref current,
            } => Visual::RadioButton {
                label,
                selected: **current == value,
            },
            Self::SelectableLabel { label, ref selected } => Visual::SelectableLabel {
                label,
                selected: **selected,
            },
            Self::ComboBox {
                options,
                ref selected,
            } => Visual::ComboBox {
                options,
                selected: **selected,
            },
            Self::Slider { min, max, ref value } => Visual::Slider {
                min,
                max,
                value: **value,
            },
            Self::ProgressBar { percent } => Visual::ProgressBar {
                percent: percent.min(100),
            },
            Self::ColorPicker { color } => Visual::ColorPicker { color },
            Self::Image { source } => Visual::Image { source },
        }
    }
}

/// Map a pointer x coordinate onto `min..=max` across `region`'s width.
///
/// The range may be given in either order. Positions outside the region clamp to
/// the nearest end; a region with no width maps everything to the lower bound.
fn slider_value(region: HitRegion, x: f64, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let rect = region.rect();
    let width = rect.width();
    if width <= 0.0 || width.is_nan() {
        return lo;
    }
    let t = ((x - rect.x0) / width).clamp(0.0, 1.0);
    let span = f64::from(hi) - f64::from(lo);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "0 <= t * span + 0.5 <= span + 0.5, which fits in i64"
    )]
    let offset = (t * span + 0.5) as i64;
    let value = i64::from(lo) + offset;
    i32::try_from(value).unwrap_or(hi).clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::frame::FrameDriver;

    fn region() -> HitRegion {
        HitRegion::new(0.0, 0.0, 100.0, 10.0)
    }

    /// Press then release at `at`, running `declare` in both frames.
    fn click(
        driver: &mut FrameDriver<u32>,
        at: Point,
        mut declare: impl FnMut(&mut Frame<'_, u32>) -> Response<u32>,
    ) -> Response<u32> {
        let mut frame = driver.begin_frame(at, true);
        declare(&mut frame);
        frame.end();
        let mut frame = driver.begin_frame(at, false);
        declare(&mut frame)
    }

    #[test]
    fn slider_value_maps_and_clamps() {
        let r = region();
        assert_eq!(slider_value(r, 0.0, 0, 10), 0);
        assert_eq!(slider_value(r, 50.0, 0, 10), 5);
        assert_eq!(slider_value(r, 100.0, 0, 10), 10);
        assert_eq!(slider_value(r, -20.0, 0, 10), 0);
        assert_eq!(slider_value(r, 250.0, 0, 10), 10);
        assert_eq!(slider_value(r, 50.0, 10, 0), 5);
        assert_eq!(slider_value(r, 100.0, i32::MIN, i32::MAX), i32::MAX);
        assert_eq!(slider_value(r, 0.0, i32::MIN, i32::MAX), i32::MIN);
        assert_eq!(slider_value(HitRegion::new(0.0, 0.0, 0.0, 10.0), 5.0, 3, 9), 3);
        assert_eq!(slider_value(r, f64::NAN, 3, 9), 3);
    }

    #[test]
    fn display_only_kinds_do_not_touch_state() {
        let mut driver = FrameDriver::<u32>::new();
        let mut frame = driver.begin_frame(Point::new(5.0, 5.0), true);
        let response = Widget::Label { text: "hi" }
            .interact(&mut frame, 1, region())
            .unwrap();
        assert_eq!(response, Response::inert(1));
        let report = frame.end();
        assert_eq!(report.widgets, 0);
        assert_eq!(report.hot, None);
    }

    #[test]
    fn checkbox_toggles_on_click() {
        let mut driver = FrameDriver::new();
        let mut checked = false;
        let response = click(&mut driver, Point::new(5.0, 5.0), |frame| {
            Widget::Checkbox {
                label: "x",
                checked: &mut checked,
            }
            .interact(frame, 1, region())
            .unwrap()
        });
        assert!(response.clicked);
        assert!(response.changed);
        assert!(checked);
    }

    #[test]
    fn radio_button_sets_group_value() {
        let mut driver = FrameDriver::new();
        let mut current = 0;
        let response = click(&mut driver, Point::new(5.0, 5.0), |frame| {
            Widget::RadioButton {
                label: "b",
                value: 2,
                current: &mut current,
            }
            .interact(frame, 1, region())
            .unwrap()
        });
        assert!(response.changed);
        assert_eq!(current, 2);
    }

    #[test]
    fn combo_box_wraps_around() {
        let mut driver = FrameDriver::new();
        let options = ["a", "b"];
        let mut selected = 1;
        let response = click(&mut driver, Point::new(5.0, 5.0), |frame| {
            Widget::ComboBox {
                options: &options,
                selected: &mut selected,
            }
            .interact(frame, 1, region())
            .unwrap()
        });
        assert!(response.changed);
        assert_eq!(selected, 0);
    }

    #[test]
    fn empty_combo_box_only_reports_click() {
        let mut driver = FrameDriver::new();
        let mut selected = 0;
        let response = click(&mut driver, Point::new(5.0, 5.0), |frame| {
            Widget::ComboBox {
                options: &[],
                selected: &mut selected,
            }
            .interact(frame, 1, region())
            .unwrap()
        });
        assert!(response.clicked);
        assert!(!response.changed);
    }

    #[test]
    fn slider_follows_pointer_while_active() {
        let mut driver = FrameDriver::<u32>::new();
        let mut value = 0;

        let mut frame = driver.begin_frame(Point::new(30.0, 5.0), true);
        let response = Widget::Slider {
            min: 0,
            max: 100,
            value: &mut value,
        }
        .interact(&mut frame, 1, region())
        .unwrap();
        frame.end();
        assert!(response.active);
        assert!(response.changed);
        assert_eq!(value, 30);

        // Dragging past the end clamps, even outside the region.
        let mut frame = driver.begin_frame(Point::new(180.0, 40.0), true);
        Widget::Slider {
            min: 0,
            max: 100,
            value: &mut value,
        }
        .interact(&mut frame, 1, region())
        .unwrap();
        frame.end();
        assert_eq!(value, 100);

        // Released: the value stays put.
        let mut frame = driver.begin_frame(Point::new(10.0, 5.0), false);
        let response = Widget::Slider {
            min: 0,
            max: 100,
            value: &mut value,
        }
        .interact(&mut frame, 1, region())
        .unwrap();
        assert!(!response.changed);
        assert_eq!(value, 100);
    }

    #[test]
    fn hovering_slider_does_not_move_it() {
        let mut driver = FrameDriver::<u32>::new();
        let mut value = 7;
        let mut frame = driver.begin_frame(Point::new(50.0, 5.0), false);
        let response = Widget::Slider {
            min: 0,
            max: 100,
            value: &mut value,
        }
        .interact(&mut frame, 1, region())
        .unwrap();
        assert!(response.hot);
        assert!(!response.changed);
        assert_eq!(value, 7);
    }

    #[test]
    fn visual_snapshots_bound_values() {
        let mut current = 3;
        let widget = Widget::RadioButton {
            label: "three",
            value: 3,
            current: &mut current,
        };
        assert!(matches!(
            widget.visual(),
            Visual::RadioButton {
                label: "three",
                selected: true
            }
        ));

        let widget = Widget::ProgressBar { percent: 250 };
        assert!(matches!(
            widget.visual(),
            Visual::ProgressBar { percent: 100 }
        ));
    }
}
