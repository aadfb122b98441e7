#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{CanvasElement, DocStore, ElementId};
use crate::viewport::Point;

/// Return the topmost element whose bounding box contains `canvas_pt`.
///
/// Elements are tested front-to-back in draw order, so overlapping elements
/// resolve to the one drawn last. `None` means the background was hit.
#[must_use]
pub fn hit_test(canvas_pt: Point, doc: &DocStore) -> Option<ElementId> {
    doc.sorted_elements()
        .into_iter()
        .rev()
        .find(|element| contains(element, canvas_pt))
        .map(|element| element.id)
}

/// Whether `pt` lies within the element's bounding box, edges inclusive.
fn contains(element: &CanvasElement, pt: Point) -> bool {
    pt.x >= element.x
        && pt.x <= element.x + element.width
        && pt.y >= element.y
        && pt.y <= element.y + element.height
}
