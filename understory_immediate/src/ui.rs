// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small immediate-mode façade over [`Frame`] and [`DisplayList`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_immediate::{DrawItem, FrameDriver, HitRegion, Ui};
//!
//! let mut driver = FrameDriver::new();
//! let mut dark_mode = false;
//!
//! // Two frames: press over the checkbox, then release over it.
//! for down in [true, false] {
//!     let mut ui = Ui::new(driver.begin_frame(Point::new(4.0, 4.0), down));
//!     ui.label(0, HitRegion::new(0.0, 20.0, 80.0, 10.0), "Settings");
//!     ui.checkbox(1, HitRegion::new(0.0, 0.0, 80.0, 10.0), "Dark mode", &mut dark_mode)
//!         .unwrap();
//!     ui.finish(&mut |_: &DrawItem<'_, u32>| {});
//! }
//! assert!(dark_mode);
//! ```

use core::fmt;
use core::hash::Hash;

use peniko::Color;

use crate::frame::{Frame, FrameError, FrameReport};
use crate::hit::HitRegion;
use crate::render::{DisplayList, Renderer};
use crate::state::InteractionState;
use crate::widget::{Response, Widget};

/// Declares widgets for one frame and paints them once the frame has settled.
#[derive(Debug)]
pub struct Ui<'f, 't, K: Copy + Eq + Hash + fmt::Debug> {
    frame: Frame<'f, K>,
    display: DisplayList<'t, K>,
}

impl<'f, 't, K: Copy + Eq + Hash + fmt::Debug> Ui<'f, 't, K> {
    /// Wrap a freshly started frame.
    pub fn new(frame: Frame<'f, K>) -> Self {
        Self {
            frame,
            display: DisplayList::new(),
        }
    }

    /// Read-only view of the interaction state mid-frame.
    pub fn state(&self) -> &InteractionState<K> {
        self.frame.state()
    }

    /// Declare a widget, run its interaction and record it for painting.
    ///
    /// A rejected duplicate id is not recorded.
    pub fn add(
        &mut self,
        id: K,
        region: impl Into<HitRegion>,
        mut widget: Widget<'t, '_>,
    ) -> Result<Response<K>, FrameError<K>> {
        let region = region.into();
        let response = widget.interact(&mut self.frame, id, region)?;
        self.display
            .push(id, region, widget.visual(), widget.is_interactive());
        Ok(response)
    }

    /// Declare a static label.
    pub fn label(&mut self, id: K, region: impl Into<HitRegion>, text: &'t str) {
        let region = region.into();
        self.display.push(id, region, Widget::Label { text }.visual(), false);
    }

    /// Declare a button; returns `Ok(true)` when it was clicked.
    pub fn button(
        &mut self,
        id: K,
        region: impl Into<HitRegion>,
        text: &'t str,
    ) -> Result<bool, FrameError<K>> {
        self.add(id, region, Widget::Button { text })
            .map(|r| r.clicked)
    }

    /// Declare a checkbox bound to `checked`; returns `Ok(true)` when it toggled.
    pub fn checkbox(
        &mut self,
        id: K,
        region: impl Into<HitRegion>,
        label: &'t str,
        checked: &mut bool,
    ) -> Result<bool, FrameError<K>> {
        self.add(id, region, Widget::Checkbox { label, checked })
            .map(|r| r.changed)
    }

    /// Declare a slider bound to `value`; returns `Ok(true)` when the value moved.
    pub fn slider(
        &mut self,
        id: K,
        region: impl Into<HitRegion>,
        min: i32,
        max: i32,
        value: &mut i32,
    ) -> Result<bool, FrameError<K>> {
        self.add(id, region, Widget::Slider { min, max, value })
            .map(|r| r.changed)
    }

    /// Declare a color swatch; returns `Ok(true)` when it was clicked.
    pub fn color_picker(
        &mut self,
        id: K,
        region: impl Into<HitRegion>,
        color: Color,
    ) -> Result<bool, FrameError<K>> {
        self.add(id, region, Widget::ColorPicker { color })
            .map(|r| r.clicked)
    }

    /// End the frame, then paint every declared widget with the settled state.
    pub fn finish(self, renderer: &mut impl Renderer<K>) -> FrameReport<K> {
        let Self { frame, display } = self;
        let report = frame.end();
        let mut settled = InteractionState::new();
        settled.set_hot(report.hot);
        settled.set_active(report.active);
        display.replay(&settled, renderer);
        report
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use kurbo::Point;

    use super::*;
    use crate::frame::FrameDriver;
    use crate::render::DrawItem;
    use crate::widget::Visual;

    #[test]
    fn renderer_sees_settled_hot_state() {
        // Two overlapping buttons: the later one ends up hot even though the
        // earlier one was hot right after it was processed.
        let mut driver = FrameDriver::<u32>::new();
        let region = HitRegion::new(0.0, 0.0, 10.0, 10.0);
        let mut ui = Ui::new(driver.begin_frame(Point::new(5.0, 5.0), false));
        let below = ui.add(1, region, Widget::Button { text: "below" }).unwrap();
        let above = ui.add(2, region, Widget::Button { text: "above" }).unwrap();
        assert!(below.hot);
        assert!(above.hot);

        let mut drawn = Vec::new();
        let report = ui.finish(&mut |item: &DrawItem<'_, u32>| drawn.push((item.id, item.hot)));
        assert_eq!(report.hot, Some(2));
        assert_eq!(drawn, [(1, false), (2, true)]);
    }

    #[test]
    fn labels_are_drawn_but_not_processed() {
        let mut driver = FrameDriver::<u32>::new();
        let mut ui = Ui::new(driver.begin_frame(Point::new(5.0, 5.0), false));
        ui.label(1, HitRegion::new(0.0, 0.0, 10.0, 10.0), "hello");

        let mut texts = Vec::new();
        let report = ui.finish(&mut |item: &DrawItem<'_, u32>| {
            if let Visual::Label { text } = item.visual {
                texts.push(String::from(text));
            }
        });
        assert_eq!(texts, ["hello"]);
        assert_eq!(report.widgets, 0);
        assert_eq!(report.hot, None);
    }

    #[test]
    fn rejected_duplicate_is_not_drawn() {
        use crate::frame::{DuplicateIdHandling, FrameConfig};

        let mut driver = FrameDriver::<u32>::with_config(FrameConfig {
            duplicates: DuplicateIdHandling::Error,
            ..FrameConfig::default()
        });
        let region = HitRegion::new(0.0, 0.0, 10.0, 10.0);
        let mut ui = Ui::new(driver.begin_frame(Point::ZERO, false));
        assert_eq!(ui.button(1, region, "a"), Ok(false));
        assert_eq!(ui.button(1, region, "b"), Err(FrameError::DuplicateId(1)));

        let mut count = 0;
        ui.finish(&mut |_: &DrawItem<'_, u32>| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn slider_reports_changes() {
        let mut driver = FrameDriver::<u32>::new();
        let region = HitRegion::new(0.0, 0.0, 100.0, 10.0);
        let mut value = 0;

        let mut ui = Ui::new(driver.begin_frame(Point::new(40.0, 5.0), true));
        assert_eq!(ui.slider(1, region, 0, 10, &mut value), Ok(true));
        ui.finish(&mut |_: &DrawItem<'_, u32>| {});
        assert_eq!(value, 4);
    }
}
