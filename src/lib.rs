//! Canvas editing interaction core for the RetailCanvas ad designer.
//!
//! This crate owns the data model and input semantics of the design canvas:
//! translating pointer and keyboard events into element mutations, tracking
//! the single-selection state, snapshotting the element collection for linear
//! undo/redo, and maintaining the presentation zoom. It is renderer-agnostic:
//! the host wires input events to [`engine::EditorCore`] and re-projects its
//! state onto whatever presentation surface it uses whenever a handler
//! returns [`engine::Action::RenderNeeded`]. Notifications and in-place text
//! editing are likewise surfaced as [`engine::Action`]s for the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::EditorCore`] session aggregate and its handlers |
//! | [`doc`] | Canvas element types, formats, and the element registry |
//! | [`history`] | Bounded snapshot stacks for linear undo/redo |
//! | [`viewport`] | Presentation zoom and coordinate conversions |
//! | [`input`] | Input event types and the drag gesture state machine |
//! | [`hit`] | Hit-testing pointer positions against elements |
//! | [`consts`] | Shared numeric constants (zoom limits, history cap, etc.) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod history;
pub mod hit;
pub mod input;
pub mod viewport;
