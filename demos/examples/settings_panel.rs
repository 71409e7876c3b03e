// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A panel of mixed widgets.
//!
//! Every widget kind is declared each frame from plain application state; the
//! scripted pointer toggles a checkbox, picks a radio option, cycles a combo box
//! and drags a slider.
//!
//! Run:
//! - `cargo run -p understory_immediate_demos --example settings_panel`

use kurbo::Point;
use peniko::Color;
use understory_immediate::{FrameDriver, FrameError, HitRegion, Ui, Widget};
use understory_immediate_demos::{ScriptedPointer, TextRenderer, init_tracing};

#[derive(Debug, Default)]
struct Settings {
    notifications: bool,
    class: usize,
    currency: usize,
    budget: i32,
    favorite: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Id {
    Title,
    Notifications,
    Economy,
    Business,
    Currency,
    Budget,
    Favorite,
    Destination,
    Accent,
    Progress,
    Photo,
}

const CURRENCIES: &[&str] = &["USD", "EUR", "JPY"];

fn row(i: u32) -> HitRegion {
    HitRegion::new(10.0, 10.0 + 30.0 * f64::from(i), 200.0, 24.0)
}

fn declare(ui: &mut Ui<'_, 'static, Id>, s: &mut Settings) -> Result<(), FrameError<Id>> {
    ui.label(Id::Title, row(0), "Trip settings");
    ui.checkbox(Id::Notifications, row(1), "Notifications", &mut s.notifications)?;
    ui.add(
        Id::Economy,
        row(2),
        Widget::RadioButton {
            label: "Economy",
            value: 0,
            current: &mut s.class,
        },
    )?;
    ui.add(
        Id::Business,
        row(3),
        Widget::RadioButton {
            label: "Business",
            value: 1,
            current: &mut s.class,
        },
    )?;
    ui.add(
        Id::Currency,
        row(4),
        Widget::ComboBox {
            options: CURRENCIES,
            selected: &mut s.currency,
        },
    )?;
    ui.slider(Id::Budget, row(5), 0, 5_000, &mut s.budget)?;
    ui.add(
        Id::Favorite,
        row(6),
        Widget::SelectableLabel {
            label: "Favorite",
            selected: &mut s.favorite,
        },
    )?;
    ui.add(
        Id::Destination,
        row(7),
        Widget::TextEdit {
            placeholder: "Destination",
            text: "",
        },
    )?;
    if ui.color_picker(Id::Accent, row(8), Color::from_rgba8(0x33, 0x66, 0xcc, 0xff))? {
        println!("    -> open color picker");
    }
    ui.add(Id::Progress, row(9), Widget::ProgressBar { percent: 40 })?;
    ui.add(Id::Photo, row(10), Widget::Image { source: "beach.png" })?;
    Ok(())
}

/// Hover, press and release at the same spot.
fn click_at(y: f64) -> [(Point, bool); 3] {
    let at = Point::new(20.0, y);
    [(at, false), (at, true), (at, false)]
}

fn main() {
    init_tracing();

    let mut steps = Vec::new();
    steps.push((Point::new(300.0, 300.0), false));
    steps.extend(click_at(45.0)); // Notifications
    steps.extend(click_at(105.0)); // Business
    steps.extend(click_at(135.0)); // Currency
    steps.extend(click_at(135.0)); // Currency again
    // Drag the budget slider from its left edge to three quarters.
    steps.push((Point::new(10.0, 165.0), false));
    steps.push((Point::new(10.0, 165.0), true));
    steps.push((Point::new(110.0, 165.0), true));
    steps.push((Point::new(160.0, 165.0), true));
    steps.push((Point::new(160.0, 165.0), false));
    steps.extend(click_at(255.0)); // Accent
    let mut pointer = ScriptedPointer::new(steps);

    let mut driver = FrameDriver::new();
    let mut renderer = TextRenderer::default();
    let mut settings = Settings::default();
    let mut last_frame;

    loop {
        let mut ui = Ui::new(driver.begin_frame_from(&pointer));
        if let Err(err) = declare(&mut ui, &mut settings) {
            tracing::error!(%err, "frame declaration failed");
        }
        ui.finish(&mut renderer);
        last_frame = renderer.take();
        if !pointer.advance() {
            break;
        }
    }

    for line in last_frame {
        println!("{line}");
    }
    println!("{settings:#?}");
}
