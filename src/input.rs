//! Input model: buttons, modifier keys, and the drag gesture state machine.
//!
//! This module defines the types consumed by the editor engine. `Button` and
//! `Modifiers` capture the user's intent at the time of a pointer or key
//! event. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up; `UiState` is the persistent selection and
//! editing state the render layer projects.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ElementId;
use crate::viewport::Point;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left button or single-finger tap; the only button that drags.
    Primary,
    /// Middle (wheel) button.
    Middle,
    /// Right button or two-finger tap.
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the host
/// (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Persistent UI state visible to the render layer.
///
/// All three fields reference elements by id; the engine clears any id whose
/// element leaves the registry (delete, clear, undo/redo restore).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected element, if any. At most one element
    /// is selected at a time.
    pub selected_id: Option<ElementId>,
    /// The element drawn front-most while a drag is in progress.
    pub raised_id: Option<ElementId>,
    /// The element whose text is being edited in place, if any. Pointer-down
    /// on this element must not start a drag.
    pub editing_id: Option<ElementId>,
}

/// Internal state for the drag gesture state machine.
#[derive(Debug, Clone, Copy)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is moving an element across the canvas.
    DraggingElement {
        /// Id of the element being dragged.
        id: ElementId,
        /// Canvas-space offset from the pointer to the element's top-left,
        /// recorded at gesture start so the element doesn't jump under the
        /// pointer.
        grab: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
