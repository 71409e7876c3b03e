// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame orchestration: one pointer snapshot, one pass over every declared widget.
//!
//! ## Usage
//!
//! 1) Create a [`FrameDriver`] once, at application start.
//! 2) Each frame, call [`FrameDriver::begin_frame`] (or [`FrameDriver::begin_frame_from`])
//!    with the current pointer position and button state. This is the only way to get a
//!    [`Frame`], so the pointer is always refreshed before any widget is processed.
//! 3) Declare every widget with [`Frame::widget`], in a stable order, top-most last.
//!    Do not skip widgets that look idle: each one needs the chance to give up the hot state.
//! 4) Call [`Frame::end`] (or drop the frame) to close the frame boundary.
//!
//! ## Frame boundary
//!
//! When a frame ends, ids that were not declared during the frame are dropped from the
//! shared state: a hot widget that disappeared stops being hot, and an active widget that
//! disappeared while held releases its capture without activating.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_immediate::{FrameDriver, HitRegion};
//!
//! let mut driver = FrameDriver::new();
//! let ok = HitRegion::new(0.0, 0.0, 40.0, 20.0);
//! let cancel = HitRegion::new(50.0, 0.0, 40.0, 20.0);
//!
//! let mut frame = driver.begin_frame(Point::new(60.0, 10.0), false);
//! frame.widget("ok", ok).unwrap();
//! frame.widget("cancel", cancel).unwrap();
//! let report = frame.end();
//!
//! assert_eq!(report.hot, Some("cancel"));
//! assert_eq!(report.widgets, 2);
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;
use kurbo::Point;

use crate::hit::{HitPolicy, HitRegion};
use crate::interaction::{PointerSample, process_with_policy};
use crate::state::InteractionState;

/// Host input collaborator: the most recent pointer snapshot.
///
/// Implementations should be non-blocking reads of state the host already has.
/// A [`FrameDriver`] reads each method exactly once per frame.
pub trait PointerSource {
    /// Current pointer position in host coordinates.
    fn pointer_position(&self) -> Point;
    /// Whether the primary pointer button is held.
    fn is_button_down(&self) -> bool;
}

impl<T: PointerSource + ?Sized> PointerSource for &T {
    fn pointer_position(&self) -> Point {
        (**self).pointer_position()
    }

    fn is_button_down(&self) -> bool {
        (**self).is_button_down()
    }
}

/// What to do when the same id is declared twice in one frame.
///
/// Repeated ids are a caller bug: it becomes undefined which declaration owns the
/// hot/active state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DuplicateIdHandling {
    /// Panic in debug builds; in release builds, log a warning and process the widget.
    #[default]
    DebugAssert,
    /// Return [`FrameError::DuplicateId`] and leave the state untouched.
    Error,
    /// Process the widget anyway without reporting anything.
    Ignore,
}

/// Per-driver configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameConfig {
    /// How widget regions are hit-tested.
    pub hit_policy: HitPolicy,
    /// How repeated ids within one frame are handled.
    pub duplicates: DuplicateIdHandling,
}

/// Error returned by [`Frame::widget`].
#[derive(Clone, PartialEq, Eq)]
pub enum FrameError<K> {
    /// The id was already declared during this frame.
    DuplicateId(K),
}

impl<K: fmt::Debug> fmt::Debug for FrameError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "DuplicateId({id:?})"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for FrameError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "widget id {id:?} was declared twice in one frame"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for FrameError<K> {}

/// Summary of a finished frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameReport<K> {
    /// Number of widgets processed.
    pub widgets: usize,
    /// Widgets activated during the frame, in declaration order.
    pub activated: Vec<K>,
    /// Hot widget after the frame boundary.
    pub hot: Option<K>,
    /// Active widget after the frame boundary.
    pub active: Option<K>,
}

/// Owns the shared [`InteractionState`] and runs one interaction pass per frame.
#[derive(Clone, Debug)]
pub struct FrameDriver<K> {
    state: InteractionState<K>,
    config: FrameConfig,
    declared: HashSet<K>,
}

impl<K: Copy + Eq + Hash + fmt::Debug> Default for FrameDriver<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash + fmt::Debug> FrameDriver<K> {
    /// Create a driver with the default [`FrameConfig`].
    pub fn new() -> Self {
        Self::with_config(FrameConfig::default())
    }

    /// Create a driver with the given configuration.
    pub fn with_config(config: FrameConfig) -> Self {
        Self {
            state: InteractionState::new(),
            config,
            declared: HashSet::new(),
        }
    }

    /// The driver's configuration.
    pub fn config(&self) -> FrameConfig {
        self.config
    }

    /// Read-only view of the interaction state between frames.
    pub fn state(&self) -> &InteractionState<K> {
        &self.state
    }

    /// Return the interaction state to its startup values.
    pub fn reset(&mut self) {
        self.state = InteractionState::new();
        self.declared.clear();
    }

    /// Start a frame with the given pointer snapshot.
    ///
    /// The press edge is derived from the button state recorded by the previous frame.
    pub fn begin_frame(&mut self, position: Point, down: bool) -> Frame<'_, K> {
        let pressed = down && !self.state.pointer_down();
        self.state.set_pointer_down(down);
        self.state.set_prev_hot(self.state.hot());
        self.declared.clear();
        Frame {
            sample: PointerSample::new(position, down, pressed),
            driver: self,
            activated: Vec::new(),
            widgets: 0,
            ended: false,
        }
    }

    /// Start a frame by sampling `source` once.
    pub fn begin_frame_from(&mut self, source: &impl PointerSource) -> Frame<'_, K> {
        let position = source.pointer_position();
        let down = source.is_button_down();
        self.begin_frame(position, down)
    }
}

/// One frame's interaction pass.
///
/// Every widget declared through [`Frame::widget`] sees the same [`PointerSample`].
/// The frame boundary runs in [`Frame::end`], or on drop if `end` is never called.
#[derive(Debug)]
pub struct Frame<'a, K: Copy + Eq + Hash + fmt::Debug> {
    driver: &'a mut FrameDriver<K>,
    sample: PointerSample,
    activated: Vec<K>,
    widgets: usize,
    ended: bool,
}

impl<K: Copy + Eq + Hash + fmt::Debug> Frame<'_, K> {
    /// The pointer snapshot for this frame.
    pub fn sample(&self) -> &PointerSample {
        &self.sample
    }

    /// Read-only view of the interaction state mid-frame.
    pub fn state(&self) -> &InteractionState<K> {
        &self.driver.state
    }

    /// Process one widget and return whether it was activated this frame.
    pub fn widget(&mut self, id: K, region: HitRegion) -> Result<bool, FrameError<K>> {
        if !self.driver.declared.insert(id) {
            match self.driver.config.duplicates {
                DuplicateIdHandling::DebugAssert => {
                    debug_assert!(false, "widget id {id:?} was declared twice in one frame");
                    tracing::warn!(widget = ?id, "widget id declared twice in one frame");
                }
                DuplicateIdHandling::Error => return Err(FrameError::DuplicateId(id)),
                DuplicateIdHandling::Ignore => {}
            }
        }

        let activated = process_with_policy(
            &mut self.driver.state,
            id,
            &region,
            &self.sample,
            self.driver.config.hit_policy,
        );
        self.widgets += 1;
        if activated {
            self.activated.push(id);
        }
        Ok(activated)
    }

    /// Close the frame boundary and report what happened.
    pub fn end(mut self) -> FrameReport<K> {
        self.finish();
        FrameReport {
            widgets: self.widgets,
            activated: core::mem::take(&mut self.activated),
            hot: self.driver.state.hot(),
            active: self.driver.state.active(),
        }
    }

    fn finish(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        let driver = &mut *self.driver;
        if let Some(hot) = driver.state.hot()
            && !driver.declared.contains(&hot)
        {
            tracing::debug!(widget = ?hot, "dropping hot state of undeclared widget");
            driver.state.set_hot(None);
        }
        if let Some(active) = driver.state.active()
            && !driver.declared.contains(&active)
        {
            tracing::debug!(widget = ?active, "dropping active state of undeclared widget");
            driver.state.set_active(None);
        }
        driver.declared.clear();
    }
}

impl<K: Copy + Eq + Hash + fmt::Debug> Drop for Frame<'_, K> {
    fn drop(&mut self) {
        self.finish();
    }
}
