// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_immediate --heading-base-level=0

//! Understory Immediate: the hot/active interaction core for immediate-mode UI.
//!
//! In an immediate-mode UI, widgets are re-declared every frame and have no
//! persistent identity beyond a caller-chosen id. Only two pieces of state
//! survive from one frame to the next:
//!
//! - the **hot** widget: the one currently under the pointer, and
//! - the **active** widget: the one that captured a press and holds it until release.
//!
//! This crate owns that state and the rules for updating it, so that clicks,
//! drags and hover highlighting behave correctly without retained widget objects.
//!
//! ## Layers
//!
//! - [`state`]: [`InteractionState`], a passive holder for the hot id, the active id
//!   and the last-sampled pointer button.
//! - [`interaction`]: [`process`], the per-widget update run once per widget per frame.
//!   It returns `true` exactly when a press and a release both landed on that widget.
//! - [`frame`]: [`FrameDriver`] and [`Frame`], which take one pointer snapshot per frame,
//!   feed every declared widget through [`process`] in declaration order, and clean
//!   up stale ids at the frame boundary.
//! - [`widget`]: a closed set of widget kinds ([`Widget`]) with a single
//!   [`Widget::interact`] dispatch that applies kind-specific effects (toggles, sliders, …).
//! - [`render`]: the read-only [`Renderer`] contract and the per-frame display list.
//! - [`ui`]: [`Ui`], a small façade that declares widgets, records their visuals and
//!   replays them to a renderer once interaction state has settled.
//!
//! The crate never touches a host: pointer samples come in through
//! [`FrameDriver::begin_frame`] (or a [`PointerSource`]), and drawing goes out through
//! a [`Renderer`] after the pass.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_immediate::{FrameDriver, HitRegion};
//!
//! let mut driver = FrameDriver::<u32>::new();
//! let button = HitRegion::new(0.0, 0.0, 10.0, 10.0);
//!
//! // Press over the button: it captures the interaction but does not fire yet.
//! let mut frame = driver.begin_frame(Point::new(5.0, 5.0), true);
//! assert!(!frame.widget(1, button).unwrap());
//! frame.end();
//! assert_eq!(driver.state().active(), Some(1));
//!
//! // Release while still over it: activation fires once.
//! let mut frame = driver.begin_frame(Point::new(5.0, 5.0), false);
//! assert!(frame.widget(1, button).unwrap());
//! frame.end();
//! assert_eq!(driver.state().active(), None);
//! ```
//!
//! ## Ordering and overlap
//!
//! Widgets are processed in declaration order. When regions overlap, the
//! *last* widget declared that contains the pointer becomes hot, so the top-most
//! widget must be declared last.
//!
//! ## Caller contract
//!
//! Ids must be unique among the widgets declared in one frame. A repeated id makes
//! it undefined which declaration owns the hot/active state; [`FrameDriver`] detects
//! the repeat and reacts according to [`DuplicateIdHandling`].
//!
//! ## Features
//!
//! - `std` (default): build `kurbo`, `peniko` and `tracing` against the standard library.
//! - `libm`: use `libm` for the floating point support `kurbo` needs in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod frame;
pub mod hit;
pub mod interaction;
pub mod render;
pub mod state;
pub mod ui;
pub mod widget;

pub use frame::{
    DuplicateIdHandling, Frame, FrameConfig, FrameDriver, FrameError, FrameReport, PointerSource,
};
pub use hit::{HitPolicy, HitRegion};
pub use interaction::{PointerSample, process, process_with_policy};
pub use render::{DisplayList, DrawItem, Renderer};
pub use state::InteractionState;
pub use ui::Ui;
pub use widget::{Response, Visual, Widget};
