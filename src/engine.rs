//! The editor session aggregate and its input handlers.
//!
//! `EditorCore` owns the element registry, selection state, drag gesture,
//! undo history, and viewport for one editor instance. Handlers take
//! `&mut self` and return [`Action`]s describing host-visible effects; the
//! core never touches a presentation surface, so rendering stays a pure
//! function of its state and multiple independent sessions can coexist.
//!
//! Every structural or positional mutation checkpoints the element
//! collection *before* changing it (unconditionally at drag start), so a
//! single undo always returns to the state immediately preceding the
//! action and a zero-distance drag costs exactly one undo step.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use uuid::Uuid;

use crate::doc::{AssetKind, CanvasElement, CanvasFormat, DocStore, ElementContent, ElementId, ElementKind};
use crate::history::{History, Snapshot};
use crate::hit;
use crate::input::{Button, InputState, Key, Modifiers, UiState};
use crate::viewport::{Point, Viewport};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    Info,
}

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// State changed; the host should re-project it onto the presentation
    /// surface.
    RenderNeeded,
    /// Show a user-facing notification (toast).
    Notify { kind: NoticeKind, message: String },
    /// The host should open its in-place text editor for the element.
    EditTextRequested { id: ElementId },
}

/// Core editor session: element registry, selection, drag gesture, history,
/// and viewport.
pub struct EditorCore {
    pub doc: DocStore,
    pub history: History,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
    format: CanvasFormat,
    next_z: i64,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self {
            doc: DocStore::new(),
            history: History::new(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport: Viewport::new(),
            format: CanvasFormat::default(),
            next_z: 0,
        }
    }
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Element mutations ---

    /// Add an element with its top-left at `at` (canvas units), clamped into
    /// canvas bounds. Checkpoints first. Returns the new element's id.
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        content: ElementContent,
        at: Point,
        width: f64,
        height: f64,
    ) -> ElementId {
        self.checkpoint();
        let (canvas_w, canvas_h) = self.format.dimensions();
        let (x, y) = clamp_position(at.x, at.y, width, height, canvas_w, canvas_h);
        let id = Uuid::new_v4();
        self.next_z += 1;
        self.doc.insert(CanvasElement {
            id,
            kind,
            x,
            y,
            width,
            height,
            z_index: self.next_z,
            content,
        });
        tracing::debug!(%id, ?kind, x, y, "element added");
        id
    }

    /// Spawn a ready-made palette asset centred on the drop point.
    ///
    /// Unknown payloads surface a warning and change neither the registry
    /// nor the history.
    pub fn drop_asset(&mut self, payload: &str, screen_pt: Point) -> Vec<Action> {
        let asset: AssetKind = match payload.parse() {
            Ok(asset) => asset,
            Err(err) => {
                tracing::debug!(%err, "rejected palette drop");
                return vec![notify(NoticeKind::Warning, format!("Unsupported asset: {payload}"))];
            }
        };
        let canvas_pt = self.viewport.screen_to_canvas(screen_pt);
        let (width, height) = asset.size();
        let at = Point::new(canvas_pt.x - width / 2.0, canvas_pt.y - height / 2.0);
        self.add_element(asset.element_kind(), asset.content(), at, width, height);
        vec![
            notify(NoticeKind::Success, "Asset added to canvas".to_owned()),
            Action::RenderNeeded,
        ]
    }

    /// Delete the selected element. Silent no-op without a selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        self.checkpoint();
        self.doc.remove(&id);
        self.ui.selected_id = None;
        if self.ui.editing_id == Some(id) {
            self.ui.editing_id = None;
        }
        tracing::debug!(%id, "element deleted");
        vec![
            notify(NoticeKind::Success, "Element deleted".to_owned()),
            Action::RenderNeeded,
        ]
    }

    /// Remove every element and reset selection. Silent no-op on an empty
    /// canvas.
    pub fn clear(&mut self) -> Vec<Action> {
        if self.doc.is_empty() {
            return Vec::new();
        }
        self.checkpoint();
        self.doc.clear();
        self.ui = UiState::default();
        self.input = InputState::Idle;
        tracing::debug!("canvas cleared");
        vec![Action::RenderNeeded]
    }

    /// Replace the text of a text-content element. Checkpoints first.
    /// Unknown ids and non-text elements are silent no-ops.
    pub fn set_text(&mut self, id: &ElementId, text: String) -> Vec<Action> {
        if !self.doc.get(id).is_some_and(|element| element.content.is_text()) {
            return Vec::new();
        }
        self.checkpoint();
        if let Some(element) = self.doc.get_mut(id) {
            element.content = ElementContent::Text { text };
        }
        vec![Action::RenderNeeded]
    }

    // --- Selection ---

    /// Select `id`, atomically deselecting any previous element. Ids not in
    /// the registry are ignored.
    pub fn select(&mut self, id: &ElementId) -> Vec<Action> {
        if !self.doc.contains(id) || self.ui.selected_id == Some(*id) {
            return Vec::new();
        }
        self.ui.selected_id = Some(*id);
        vec![Action::RenderNeeded]
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_none() {
            return Vec::new();
        }
        vec![Action::RenderNeeded]
    }

    // --- History ---

    /// Restore the most recent checkpoint. Silent no-op with no history.
    pub fn undo(&mut self) -> Vec<Action> {
        let Some(snapshot) = self.history.undo(self.doc.snapshot()) else {
            return Vec::new();
        };
        self.restore(snapshot);
        tracing::debug!(remaining = self.history.past_len(), "undo");
        vec![
            notify(NoticeKind::Success, "Undo successful".to_owned()),
            Action::RenderNeeded,
        ]
    }

    /// Re-apply the most recently undone checkpoint. Silent no-op with no
    /// redo entries.
    pub fn redo(&mut self) -> Vec<Action> {
        let Some(snapshot) = self.history.redo(self.doc.snapshot()) else {
            return Vec::new();
        };
        self.restore(snapshot);
        tracing::debug!(remaining = self.history.future_len(), "redo");
        vec![
            notify(NoticeKind::Success, "Redo successful".to_owned()),
            Action::RenderNeeded,
        ]
    }

    // --- Pointer input ---

    /// Pointer pressed. Over an element: checkpoint, select, raise, and
    /// start the drag gesture. Over the background: clear the selection.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary || !matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        let canvas_pt = self.viewport.screen_to_canvas(screen_pt);
        let Some(id) = hit::hit_test(canvas_pt, &self.doc) else {
            return self.deselect_all();
        };
        if self.ui.editing_id == Some(id) {
            // The host's text editor owns this element until editing ends.
            return Vec::new();
        }
        let Some(element) = self.doc.get(&id) else {
            return Vec::new();
        };
        let grab = Point::new(canvas_pt.x - element.x, canvas_pt.y - element.y);
        self.checkpoint();
        self.ui.selected_id = Some(id);
        self.ui.raised_id = Some(id);
        self.input = InputState::DraggingElement { id, grab };
        vec![Action::RenderNeeded]
    }

    /// Pointer moved. While dragging, repositions the element clamped to
    /// canvas bounds; stray moves with no active gesture are no-ops.
    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let InputState::DraggingElement { id, grab } = self.input else {
            return Vec::new();
        };
        let canvas_pt = self.viewport.screen_to_canvas(screen_pt);
        let (canvas_w, canvas_h) = self.format.dimensions();
        let Some(element) = self.doc.get_mut(&id) else {
            return Vec::new();
        };
        let (x, y) = clamp_position(
            canvas_pt.x - grab.x,
            canvas_pt.y - grab.y,
            element.width,
            element.height,
            canvas_w,
            canvas_h,
        );
        element.x = x;
        element.y = y;
        vec![Action::RenderNeeded]
    }

    /// Pointer released: finalizes the drag and clears the raised state. No
    /// snapshot is taken here; the drag's one checkpoint was at gesture
    /// start.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary || !matches!(self.input, InputState::DraggingElement { .. }) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.ui.raised_id = None;
        vec![Action::RenderNeeded]
    }

    // --- Keyboard input ---

    /// Keyboard shortcuts: Ctrl/⌘+Z undo, Ctrl/⌘+Shift+Z redo, and
    /// Delete/Backspace for the selected element. Suppressed while the
    /// host's text editor is open.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if self.ui.editing_id.is_some() {
            return Vec::new();
        }
        if modifiers.ctrl || modifiers.meta {
            if key.0.eq_ignore_ascii_case("z") {
                return if modifiers.shift { self.redo() } else { self.undo() };
            }
            return Vec::new();
        }
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selected(),
            _ => Vec::new(),
        }
    }

    // --- Text editing ---

    /// Begin in-place text editing of a text-content element. The pointer
    /// handlers will not start drags on it until [`Self::end_text_edit`].
    pub fn begin_text_edit(&mut self, id: &ElementId) -> Vec<Action> {
        if !self.doc.get(id).is_some_and(|element| element.content.is_text()) {
            return Vec::new();
        }
        self.ui.editing_id = Some(*id);
        vec![Action::EditTextRequested { id: *id }]
    }

    /// End in-place text editing.
    pub fn end_text_edit(&mut self) {
        self.ui.editing_id = None;
    }

    // --- Viewport / format ---

    /// Step the zoom up one notch. No-op at the maximum bound.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        if self.viewport.zoom_in() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Step the zoom down one notch. No-op at the minimum bound.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        if self.viewport.zoom_out() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Switch the canvas format. Elements keep their stored positions; the
    /// new bounds apply from the next drag. Not an undoable operation.
    pub fn set_format(&mut self, format: CanvasFormat) -> Vec<Action> {
        if format == self.format {
            return Vec::new();
        }
        self.format = format;
        let (width, height) = format.dimensions();
        vec![
            notify(NoticeKind::Success, format!("Canvas resized to {width}×{height}")),
            Action::RenderNeeded,
        ]
    }

    // --- Queries ---

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&CanvasElement> {
        self.doc.get(id)
    }

    /// All elements in draw order.
    #[must_use]
    pub fn elements(&self) -> Vec<&CanvasElement> {
        self.doc.sorted_elements()
    }

    /// Current zoom level in percent.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        self.viewport.percent()
    }

    /// Current canvas format.
    #[must_use]
    pub fn format(&self) -> CanvasFormat {
        self.format
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Internals ---

    /// Capture the current collection as an undo checkpoint.
    fn checkpoint(&mut self) {
        self.history.checkpoint(self.doc.snapshot());
        tracing::debug!(past = self.history.past_len(), "checkpoint");
    }

    /// Restore the registry from a snapshot and drop UI/gesture references
    /// to elements that no longer exist.
    fn restore(&mut self, snapshot: Snapshot) {
        self.doc.restore(snapshot);
        self.input = InputState::Idle;
        self.ui.raised_id = None;
        if let Some(id) = self.ui.selected_id
            && !self.doc.contains(&id)
        {
            self.ui.selected_id = None;
        }
        if let Some(id) = self.ui.editing_id
            && !self.doc.contains(&id)
        {
            self.ui.editing_id = None;
        }
    }
}

/// Clamp an element's top-left so the element stays fully within the canvas.
/// When the element is larger than the canvas, the lower bound wins.
fn clamp_position(x: f64, y: f64, width: f64, height: f64, canvas_w: f64, canvas_h: f64) -> (f64, f64) {
    (x.min(canvas_w - width).max(0.0), y.min(canvas_h - height).max(0.0))
}

fn notify(kind: NoticeKind, message: String) -> Action {
    Action::Notify { kind, message }
}
