// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared hot/active state carried from one frame to the next.
//!
//! [`InteractionState`] is deliberately passive: it only stores values and exposes
//! getters and setters. All rules for how the values change live in
//! [`process`](crate::interaction::process) and in the [`FrameDriver`](crate::FrameDriver),
//! which keeps the state easy to inspect and to set up in tests.

/// Hot/active interaction state for one UI.
///
/// Create one instance at application start and keep it for the lifetime of the UI.
/// `None` plays the role of the "no widget" sentinel for both ids.
///
/// - `hot`: the widget under the pointer as of the most recent widget check.
/// - `prev_hot`: the hot widget as it stood when the current frame began.
///   Releases consult this value, so an overlapped widget processed earlier in
///   the frame cannot swallow the release of the widget on top.
/// - `active`: the widget that captured a press and holds it until release.
/// - `pointer_down`: the primary button state from the most recent frame sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InteractionState<K> {
    hot: Option<K>,
    prev_hot: Option<K>,
    active: Option<K>,
    pointer_down: bool,
}

impl<K> Default for InteractionState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> InteractionState<K> {
    /// Create a state with no hot widget, no active widget and the button up.
    pub const fn new() -> Self {
        Self {
            hot: None,
            prev_hot: None,
            active: None,
            pointer_down: false,
        }
    }

    /// Set the hot widget, or clear it with `None`.
    pub fn set_hot(&mut self, id: Option<K>) {
        self.hot = id;
    }

    /// Set the hot widget as of the start of the current frame.
    pub fn set_prev_hot(&mut self, id: Option<K>) {
        self.prev_hot = id;
    }

    /// Set the active widget, or clear it with `None`.
    pub fn set_active(&mut self, id: Option<K>) {
        self.active = id;
    }

    /// Record the most recently sampled primary button state.
    pub fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }

    /// Returns the last sampled primary button state.
    pub const fn pointer_down(&self) -> bool {
        self.pointer_down
    }
}

impl<K: Copy + Eq> InteractionState<K> {
    /// Returns the hot widget, if any.
    pub fn hot(&self) -> Option<K> {
        self.hot
    }

    /// Returns the hot widget as of the start of the current frame, if any.
    pub fn prev_hot(&self) -> Option<K> {
        self.prev_hot
    }

    /// Returns the active widget, if any.
    pub fn active(&self) -> Option<K> {
        self.active
    }

    /// Returns `true` if `id` is the hot widget.
    pub fn is_hot(&self, id: K) -> bool {
        self.hot == Some(id)
    }

    /// Returns `true` if `id` is the active widget.
    pub fn is_active(&self, id: K) -> bool {
        self.active == Some(id)
    }
}
