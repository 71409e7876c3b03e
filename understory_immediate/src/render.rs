// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering contract: widgets are painted after the interaction pass has settled.
//!
//! Interaction code never calls into the host. Instead, each declared widget is
//! recorded in a [`DisplayList`] and replayed to a [`Renderer`] once the frame has
//! ended, with the final hot/active flags filled in. Renderers only ever see shared
//! references, so they cannot change interaction state.

use alloc::vec::Vec;

use crate::hit::HitRegion;
use crate::state::InteractionState;
use crate::widget::Visual;

/// One widget as handed to a [`Renderer`].
#[derive(Copy, Clone, Debug)]
pub struct DrawItem<'t, K> {
    /// The widget's id.
    pub id: K,
    /// Where the widget was declared.
    pub region: HitRegion,
    /// What the widget looked like after it was processed.
    pub visual: Visual<'t>,
    /// The widget is hot once the frame settled.
    pub hot: bool,
    /// The widget is active once the frame settled.
    pub active: bool,
}

/// Rendering backend collaborator.
pub trait Renderer<K> {
    /// Paint one widget. Called once per declared widget, in declaration order.
    fn draw(&mut self, item: &DrawItem<'_, K>);
}

impl<K, F: FnMut(&DrawItem<'_, K>)> Renderer<K> for F {
    fn draw(&mut self, item: &DrawItem<'_, K>) {
        self(item);
    }
}

#[derive(Clone, Debug)]
struct Entry<'t, K> {
    id: K,
    region: HitRegion,
    visual: Visual<'t>,
    interactive: bool,
}

/// Widgets recorded during a frame, waiting to be painted.
#[derive(Clone, Debug)]
pub struct DisplayList<'t, K> {
    entries: Vec<Entry<'t, K>>,
}

impl<K> Default for DisplayList<'_, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, K> DisplayList<'t, K> {
    /// Create an empty display list.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of recorded widgets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a widget. Display-only widgets are never drawn as hot or active.
    pub fn push(&mut self, id: K, region: HitRegion, visual: Visual<'t>, interactive: bool) {
        self.entries.push(Entry {
            id,
            region,
            visual,
            interactive,
        });
    }

    /// Forget all recorded widgets, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Copy + Eq> DisplayList<'_, K> {
    /// Replay every recorded widget to `renderer`, in recording order, with hot/active
    /// flags taken from `state`.
    pub fn replay(&self, state: &InteractionState<K>, renderer: &mut impl Renderer<K>) {
        for entry in &self.entries {
            let item = DrawItem {
                id: entry.id,
                region: entry.region,
                visual: entry.visual,
                hot: entry.interactive && state.is_hot(entry.id),
                active: entry.interactive && state.is_active(entry.id),
            };
            renderer.draw(&item);
        }
    }
}
