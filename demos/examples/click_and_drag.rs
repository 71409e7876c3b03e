// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click and drag-off basics.
//!
//! Drive two buttons with a scripted pointer: one clean click on "Generate",
//! then a press on "Cancel" that drags off before releasing and so never fires.
//!
//! Run:
//! - `cargo run -p understory_immediate_demos --example click_and_drag`
//! - `RUST_LOG=understory_immediate=trace cargo run -p understory_immediate_demos --example click_and_drag`

use kurbo::Point;
use understory_immediate::{FrameDriver, HitRegion, Ui};
use understory_immediate_demos::{ScriptedPointer, TextRenderer, init_tracing};

fn main() {
    init_tracing();

    let generate = HitRegion::new(50.0, 50.0, 100.0, 50.0);
    let cancel = HitRegion::new(170.0, 50.0, 100.0, 50.0);

    let mut pointer = ScriptedPointer::new([
        (Point::new(10.0, 10.0), false),
        (Point::new(80.0, 70.0), false),  // hover Generate
        (Point::new(80.0, 70.0), true),   // press
        (Point::new(90.0, 75.0), false),  // release over it: click
        (Point::new(200.0, 70.0), false), // hover Cancel
        (Point::new(200.0, 70.0), true),  // press
        (Point::new(320.0, 70.0), true),  // drag off
        (Point::new(320.0, 70.0), false), // release elsewhere: no click
    ]);

    let mut driver = FrameDriver::<&'static str>::new();
    let mut renderer = TextRenderer::default();
    let mut frame_no = 0;

    loop {
        let mut ui = Ui::new(driver.begin_frame_from(&pointer));
        let generated = ui.button("generate", generate, "Generate Itinerary");
        let cancelled = ui.button("cancel", cancel, "Cancel");
        let report = ui.finish(&mut renderer);

        println!("frame {frame_no}: {:?}", report.activated);
        for line in renderer.take() {
            println!("    {line}");
        }
        if generated == Ok(true) {
            println!("    -> Generate Itinerary clicked!");
        }
        if cancelled == Ok(true) {
            println!("    -> Cancel clicked!");
        }

        frame_no += 1;
        if !pointer.advance() {
            break;
        }
    }
}
