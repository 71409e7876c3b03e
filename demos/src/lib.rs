// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless demos.
//!
//! There is no window here: a [`ScriptedPointer`] stands in for the host's input
//! and a [`TextRenderer`] prints each widget as a line of text.

use std::fmt::Debug;

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_immediate::{DrawItem, PointerSource, Renderer, Visual};

/// Install a `tracing` subscriber that honors `RUST_LOG` (default: `info`).
///
/// Run with `RUST_LOG=understory_immediate=trace` to see every hot/active transition.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// A pointer that replays a fixed script, one step per frame.
#[derive(Clone, Debug)]
pub struct ScriptedPointer {
    steps: Vec<(Point, bool)>,
    cursor: usize,
}

impl ScriptedPointer {
    /// Create a pointer from `(position, button down)` steps.
    pub fn new(steps: impl IntoIterator<Item = (Point, bool)>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of steps in the script.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Move to the next step; returns `false` once the script is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> (Point, bool) {
        self.steps
            .get(self.cursor)
            .copied()
            .unwrap_or((Point::ZERO, false))
    }
}

impl PointerSource for ScriptedPointer {
    fn pointer_position(&self) -> Point {
        self.current().0
    }

    fn is_button_down(&self) -> bool {
        self.current().1
    }
}

/// Renders widgets as indented text lines.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    /// Lines drawn since the last [`TextRenderer::take`].
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the drawn lines, leaving the renderer empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl<K: Debug> Renderer<K> for TextRenderer {
    fn draw(&mut self, item: &DrawItem<'_, K>) {
        let marker = match (item.hot, item.active) {
            (_, true) => '*',
            (true, false) => '>',
            (false, false) => ' ',
        };
        let body = describe(&item.visual);
        self.lines.push(format!("{marker} {:?} {body}", item.id));
    }
}

fn describe(visual: &Visual<'_>) -> String {
    match *visual {
        Visual::Label { text } => text.to_string(),
        Visual::Button { text } => format!("[ {text} ]"),
        Visual::TextEdit { placeholder, text } => {
            if text.is_empty() {
                format!("|{placeholder}|")
            } else {
                format!("|{text}|")
            }
        }
        Visual::Checkbox { label, checked } => {
            format!("[{}] {label}", if checked { 'x' } else { ' ' })
        }
        Visual::RadioButton { label, selected } => {
            format!("({}) {label}", if selected { 'o' } else { ' ' })
        }
        Visual::SelectableLabel { label, selected } => {
            if selected {
                format!("<{label}>")
            } else {
                label.to_string()
            }
        }
        Visual::ComboBox { options, selected } => {
            format!("{} v", options.get(selected).copied().unwrap_or(""))
        }
        Visual::Slider { min, max, value } => format!("{min} --{value}-- {max}"),
        Visual::ProgressBar { percent } => format!("{percent}%"),
        Visual::ColorPicker { color } => {
            let rgba = color.to_rgba8();
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        }
        Visual::Image { source } => format!("<img {source}>"),
    }
}
