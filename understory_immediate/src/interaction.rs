// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget interaction: update hot/active state for one widget and report activation.
//!
//! ## Usage
//!
//! 1) Take one [`PointerSample`] per frame (a [`FrameDriver`](crate::FrameDriver) does this for you).
//! 2) For every widget, in declaration order, call [`process`] with the widget's id and region.
//! 3) A `true` result means the widget was activated (clicked) this frame.
//!
//! ## Update order
//!
//! Each call runs three steps, in this order:
//!
//! 1. **Release.** If the widget is active and the button is up, it loses the active
//!    state. It is activated only if it was still hot at that moment: hot now, or hot
//!    when the frame began ([`InteractionState::prev_hot`]) in case an overlapped
//!    widget declared earlier in this frame has already taken the hot state.
//! 2. **Capture.** Otherwise, if nothing is active, the button is held and the widget
//!    is hot, the widget becomes active. A widget whose region contains the pointer on
//!    the frame the button goes down captures too, so a press lands even when the
//!    pointer arrives in the same sample. Activation fires on release, never on press.
//! 3. **Hover.** Independently, the widget becomes hot if its region contains the pointer,
//!    or gives up the hot state if it held it and no longer contains the pointer.
//!
//! Hover runs last so that release uses the hot state from *before* this widget's own
//! re-evaluation, and so a widget that just captured the press is not un-hovered by
//! stale state.
//!
//! On the frame the button goes down, nothing can still be active from an earlier
//! frame: the previous sample had the button up, which released it. Any active id seen
//! during that frame was captured by a widget processed earlier in the same pass, and a
//! later widget containing the pointer takes it over. Overlapping widgets therefore
//! route the press to the last one declared, matching hover.

//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_immediate::{HitRegion, InteractionState, PointerSample, process};
//!
//! let mut state = InteractionState::new();
//! let region = HitRegion::new(0.0, 0.0, 10.0, 10.0);
//! let at = Point::new(5.0, 5.0);
//!
//! assert!(!process(&mut state, 1_u32, &region, &PointerSample::new(at, true, true)));
//! assert_eq!(state.active(), Some(1));
//!
//! assert!(process(&mut state, 1, &region, &PointerSample::new(at, false, false)));
//! assert_eq!(state.active(), None);
//! assert_eq!(state.hot(), Some(1));
//! ```

use core::fmt::Debug;

use kurbo::Point;

use crate::hit::{HitPolicy, HitRegion};
use crate::state::InteractionState;

/// A single consistent pointer snapshot shared by every widget in one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in host coordinates.
    pub position: Point,
    /// Whether the primary button is held.
    pub down: bool,
    /// Whether the primary button went down since the previous sample.
    pub pressed: bool,
}

impl PointerSample {
    /// Create a sample from its parts.
    ///
    /// `pressed` implies `down`; a sample that claims a press with the button up
    /// is treated as not pressed.
    pub const fn new(position: Point, down: bool, pressed: bool) -> Self {
        Self {
            position,
            down,
            pressed: pressed && down,
        }
    }
}

/// Run the interaction update for one widget using [`HitPolicy::HalfOpen`].
///
/// Returns `true` if the widget was activated this frame.
/// See the [module docs](self) for the exact update order.
pub fn process<K: Copy + Eq + Debug>(
    state: &mut InteractionState<K>,
    id: K,
    region: &HitRegion,
    sample: &PointerSample,
) -> bool {
    process_with_policy(state, id, region, sample, HitPolicy::HalfOpen)
}

/// Run the interaction update for one widget using the given hit policy.
///
/// Returns `true` if the widget was activated this frame.
pub fn process_with_policy<K: Copy + Eq + Debug>(
    state: &mut InteractionState<K>,
    id: K,
    region: &HitRegion,
    sample: &PointerSample,
    policy: HitPolicy,
) -> bool {
    let inside = region.contains_with(sample.position, policy);
    let mut activated = false;

    if state.is_active(id) {
        if !sample.down {
            if state.is_hot(id) || state.prev_hot() == Some(id) {
                activated = true;
                tracing::debug!(widget = ?id, "activated");
            }
            set_active(state, id, None);
        }
    } else if (sample.pressed && inside)
        || (sample.down && state.active().is_none() && state.is_hot(id))
    {
        set_active(state, id, Some(id));
    }

    if inside {
        set_hot(state, id, Some(id));
    } else if state.is_hot(id) {
        set_hot(state, id, None);
    }

    activated
}

fn set_hot<K: Copy + Eq + Debug>(state: &mut InteractionState<K>, id: K, to: Option<K>) {
    let from = state.hot();
    if from != to {
        tracing::trace!(widget = ?id, ?from, ?to, "hot changed");
        state.set_hot(to);
    }
}

fn set_active<K: Copy + Eq + Debug>(state: &mut InteractionState<K>, id: K, to: Option<K>) {
    let from = state.active();
    if from != to {
        tracing::trace!(widget = ?id, ?from, ?to, "active changed");
        state.set_active(to);
    }
}
