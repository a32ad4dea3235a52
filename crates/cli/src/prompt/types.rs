//! Type definitions for the prompt widgets.
//!
//! This module defines the labeled choices handed to a selection prompt and
//! the state of the full-screen selection list.

use std::fmt::{Display, Formatter};

/// A selectable entry: what is shown, and what is returned when chosen.
#[derive(Clone, Debug, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<T: Display> Choice<T> {
    /// A choice labeled with the value's own display form.
    pub fn from_value(value: T) -> Self {
        Self {
            label: value.to_string(),
            value,
        }
    }
}

impl<T> Display for Choice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Direction to cycle through the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// Visible window of the list when it does not fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete state of the selection list.
#[derive(Clone, PartialEq, Debug)]
pub struct SelectState {
    /// Position of the highlighted row among the displayed rows
    pub selected_index: usize,
    pub viewport: ViewportState,
    pub is_filtering: bool,
    pub filter_text: String,
}

impl SelectState {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                // Subtract 2 for prompt and filter line
                height: height.saturating_sub(2).max(1),
                width,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }
}

/// What a key press asks the selection list to do.
#[derive(Clone, PartialEq, Debug)]
pub enum KeyAction {
    /// Return the choice at this position of the full list
    Choose(usize),
    Cancel,
    Move(CycleDirection),
    Update(SelectState),
    Bell,
    Ignore,
}
