#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::doc::{CanvasElement, ElementContent, ElementKind};

fn make_element_at(x: f64, y: f64, w: f64, h: f64, z: i64) -> CanvasElement {
    CanvasElement {
        id: Uuid::new_v4(),
        kind: ElementKind::Shape,
        x,
        y,
        width: w,
        height: h,
        z_index: z,
        content: ElementContent::None,
    }
}

#[test]
fn empty_doc_hits_nothing() {
    let doc = DocStore::new();
    assert!(hit_test(Point::new(10.0, 10.0), &doc).is_none());
}

#[test]
fn point_inside_hits_element() {
    let mut doc = DocStore::new();
    let element = make_element_at(10.0, 10.0, 100.0, 50.0, 0);
    let id = element.id;
    doc.insert(element);
    assert_eq!(hit_test(Point::new(50.0, 30.0), &doc), Some(id));
}

#[test]
fn point_outside_misses() {
    let mut doc = DocStore::new();
    doc.insert(make_element_at(10.0, 10.0, 100.0, 50.0, 0));
    assert!(hit_test(Point::new(150.0, 30.0), &doc).is_none());
    assert!(hit_test(Point::new(50.0, 70.0), &doc).is_none());
}

#[test]
fn edges_are_inclusive() {
    let mut doc = DocStore::new();
    let element = make_element_at(10.0, 10.0, 100.0, 50.0, 0);
    let id = element.id;
    doc.insert(element);
    assert_eq!(hit_test(Point::new(10.0, 10.0), &doc), Some(id));
    assert_eq!(hit_test(Point::new(110.0, 60.0), &doc), Some(id));
}

#[test]
fn just_outside_edges_misses() {
    let mut doc = DocStore::new();
    doc.insert(make_element_at(10.0, 10.0, 100.0, 50.0, 0));
    assert!(hit_test(Point::new(9.9, 10.0), &doc).is_none());
    assert!(hit_test(Point::new(110.1, 60.0), &doc).is_none());
}

#[test]
fn topmost_of_overlapping_wins() {
    let mut doc = DocStore::new();
    let below = make_element_at(0.0, 0.0, 100.0, 100.0, 1);
    let above = make_element_at(50.0, 50.0, 100.0, 100.0, 2);
    let above_id = above.id;
    doc.insert(below);
    doc.insert(above);
    // (60, 60) is inside both; the higher z wins.
    assert_eq!(hit_test(Point::new(60.0, 60.0), &doc), Some(above_id));
}

#[test]
fn non_overlapping_region_hits_lower_element() {
    let mut doc = DocStore::new();
    let below = make_element_at(0.0, 0.0, 100.0, 100.0, 1);
    let below_id = below.id;
    doc.insert(below);
    doc.insert(make_element_at(50.0, 50.0, 100.0, 100.0, 2));
    assert_eq!(hit_test(Point::new(10.0, 10.0), &doc), Some(below_id));
}

#[test]
fn zero_size_element_hits_only_its_corner() {
    let mut doc = DocStore::new();
    let element = make_element_at(20.0, 20.0, 0.0, 0.0, 0);
    let id = element.id;
    doc.insert(element);
    assert_eq!(hit_test(Point::new(20.0, 20.0), &doc), Some(id));
    assert!(hit_test(Point::new(20.1, 20.0), &doc).is_none());
}
