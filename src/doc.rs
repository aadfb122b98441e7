//! Document model: canvas elements, formats, palette assets, and the registry.
//!
//! This module defines the core data types that describe what is on the
//! canvas (`CanvasElement`, `ElementKind`, `ElementContent`), the preset
//! canvas dimensions (`CanvasFormat`), the palette payloads that spawn
//! ready-made badges (`AssetKind`), and the runtime registry that owns all
//! live elements (`DocStore`).
//!
//! Data flows into this layer from the input engine (mutations) and from the
//! history manager (snapshot restores). The render layer reads from
//! `DocStore` via `sorted_elements` to determine draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{AVAILABILITY_TAG_SIZE, LOGO_BADGE_SIZE, PRICE_BADGE_SIZE};

/// Unique identifier for a canvas element. Stable across undo/redo.
pub type ElementId = Uuid;

/// The kind of a canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// Product image or uploaded picture.
    Image,
    /// Free-standing editable text block (headline, offer copy).
    Text,
    /// Decorative shape with no payload.
    Shape,
    /// Brand logo badge.
    LogoBadge,
    /// Price/offer badge ("Member Price").
    PriceBadge,
    /// Availability pill ("Available in store").
    AvailabilityTag,
}

/// Content payload of a canvas element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementContent {
    /// Reference to an image asset. The core never holds pixel data.
    Image {
        /// Asset key or URL resolved by the host.
        source: String,
    },
    /// Editable text.
    Text {
        /// The displayed string.
        text: String,
    },
    /// No payload (decorative shapes, pre-styled badges).
    None,
}

impl ElementContent {
    /// The text payload, if this is text content.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Image { .. } | Self::None => None,
        }
    }

    /// Whether this content is in-place editable text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// A design element placed on the canvas.
///
/// Positions and sizes are in canvas-local, unscaled units with the origin
/// at the canvas top-left. The transient "raised" state while dragging is
/// presentation-only and lives in `UiState`, never on the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasElement {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// What the element is.
    pub kind: ElementKind,
    /// Left edge of the bounding box.
    pub x: f64,
    /// Top edge of the bounding box.
    pub y: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Variant payload.
    pub content: ElementContent,
}

/// Preset canvas dimensions for common retail placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanvasFormat {
    /// Square social post, 400×400.
    #[default]
    Social,
    /// Landscape feed card, 450×236.
    Feed,
    /// Portrait story, 270×480.
    Story,
    /// In-store screen, 640×360.
    InStore,
    /// Leaderboard banner, 728×90.
    Banner,
}

impl CanvasFormat {
    /// Canvas width and height in canvas units.
    #[must_use]
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Social => (400.0, 400.0),
            Self::Feed => (450.0, 236.0),
            Self::Story => (270.0, 480.0),
            Self::InStore => (640.0, 360.0),
            Self::Banner => (728.0, 90.0),
        }
    }

    /// Canvas width in canvas units.
    #[must_use]
    pub fn width(self) -> f64 {
        self.dimensions().0
    }

    /// Canvas height in canvas units.
    #[must_use]
    pub fn height(self) -> f64 {
        self.dimensions().1
    }
}

/// Error returned when a palette drop payload names no known asset.
#[derive(Debug, thiserror::Error)]
#[error("unknown asset payload: {0:?}")]
pub struct UnknownAsset(pub String);

/// Draggable palette assets that spawn ready-made badge elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Brand logo badge.
    LogoBadge,
    /// Price/offer badge.
    PriceBadge,
    /// Availability pill.
    AvailabilityTag,
}

impl FromStr for AssetKind {
    type Err = UnknownAsset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logo-badge" => Ok(Self::LogoBadge),
            "price-badge" => Ok(Self::PriceBadge),
            "availability-tag" => Ok(Self::AvailabilityTag),
            other => Err(UnknownAsset(other.to_owned())),
        }
    }
}

impl AssetKind {
    /// The element kind spawned by this asset.
    #[must_use]
    pub fn element_kind(self) -> ElementKind {
        match self {
            Self::LogoBadge => ElementKind::LogoBadge,
            Self::PriceBadge => ElementKind::PriceBadge,
            Self::AvailabilityTag => ElementKind::AvailabilityTag,
        }
    }

    /// Intrinsic size of the spawned element, in canvas units.
    #[must_use]
    pub fn size(self) -> (f64, f64) {
        match self {
            Self::LogoBadge => LOGO_BADGE_SIZE,
            Self::PriceBadge => PRICE_BADGE_SIZE,
            Self::AvailabilityTag => AVAILABILITY_TAG_SIZE,
        }
    }

    /// Default content of the spawned element.
    #[must_use]
    pub fn content(self) -> ElementContent {
        match self {
            Self::LogoBadge => ElementContent::None,
            Self::PriceBadge => ElementContent::Text { text: "Member Price".to_owned() },
            Self::AvailabilityTag => ElementContent::Text { text: "Available in store".to_owned() },
        }
    }
}

/// In-memory registry of canvas elements.
pub struct DocStore {
    elements: HashMap<ElementId, CanvasElement>,
}

impl DocStore {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: HashMap::new() }
    }

    /// Insert or replace an element. If an element with the same `id`
    /// already exists it is overwritten.
    pub fn insert(&mut self, element: CanvasElement) {
        self.elements.insert(element.id, element);
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<CanvasElement> {
        self.elements.remove(id)
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&CanvasElement> {
        self.elements.get(id)
    }

    /// Return a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut CanvasElement> {
        self.elements.get_mut(id)
    }

    /// Whether an element with `id` is in the registry.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Structural copy of the full collection, ordered bottom-to-top.
    ///
    /// The copy shares nothing with the registry; later mutations do not
    /// leak into it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CanvasElement> {
        self.sorted_elements().into_iter().cloned().collect()
    }

    /// Replace all elements with a snapshot.
    pub fn restore(&mut self, snapshot: Vec<CanvasElement>) {
        self.elements.clear();
        for element in snapshot {
            self.elements.insert(element.id, element);
        }
    }

    /// Return all elements sorted by `(z_index, id)` for draw-order.
    #[must_use]
    pub fn sorted_elements(&self) -> Vec<&CanvasElement> {
        let mut elements: Vec<&CanvasElement> = self.elements.values().collect();
        elements.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        elements
    }

    /// Number of elements currently in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the registry contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
