#![allow(clippy::float_cmp)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::geom::round_to;

// =============================================================
// Helpers
// =============================================================

fn ll(lng: f64, lat: f64) -> LngLat {
    LngLat::new(lng, lat)
}

fn draft_of(points: &[(f64, f64)]) -> Draft {
    let mut draft = Draft::new();
    draft.restore(points.iter().map(|&(x, y)| ll(x, y)).collect());
    draft
}

fn triangle() -> Draft {
    draft_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])
}

// =============================================================
// edges
// =============================================================

#[test]
fn edges_empty_and_single_have_none() {
    assert_eq!(Draft::new().edges().count(), 0);
    assert_eq!(draft_of(&[(1.0, 1.0)]).edges().count(), 0);
}

#[test]
fn edges_two_vertices_single_segment_without_closing() {
    let edges: Vec<_> = draft_of(&[(0.0, 0.0), (1.0, 0.0)]).edges().collect();
    assert_eq!(edges, vec![(0, ll(0.0, 0.0), ll(1.0, 0.0))]);
}

#[test]
fn edges_triangle_includes_closing_edge() {
    let edges: Vec<_> = triangle().edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2], (2, ll(10.0, 10.0), ll(0.0, 0.0)));
}

// =============================================================
// insert_near
// =============================================================

#[test]
fn insert_targets_nearest_edge() {
    let mut draft = triangle();
    let index = draft.insert_near(ll(5.0, 0.1));
    assert_eq!(index, 1);
    assert_eq!(draft.vertices(), &[ll(0.0, 0.0), ll(5.0, 0.1), ll(10.0, 0.0), ll(10.0, 10.0)]);
}

#[test]
fn insert_near_closing_edge_appends_after_last() {
    let mut draft = triangle();
    let index = draft.insert_near(ll(4.0, 5.0));
    assert_eq!(index, 3);
    assert_eq!(draft.vertices()[3], ll(4.0, 5.0));
}

#[test]
fn insert_into_empty_appends_at_zero() {
    let mut draft = Draft::new();
    assert_eq!(draft.insert_near(ll(3.0, 4.0)), 0);
    assert_eq!(draft.len(), 1);
    assert!(draft.finalize(6).is_none());
}

#[test]
fn insert_with_one_vertex_appends() {
    let mut draft = draft_of(&[(0.0, 0.0)]);
    assert_eq!(draft.insert_near(ll(-5.0, 0.0)), 1);
    assert_eq!(draft.vertices(), &[ll(0.0, 0.0), ll(-5.0, 0.0)]);
}

#[test]
fn insert_with_two_vertices_splits_the_segment() {
    let mut draft = draft_of(&[(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(draft.insert_near(ll(20.0, 5.0)), 1);
    assert_eq!(draft.vertices()[1], ll(20.0, 5.0));
}

#[test]
fn insert_equidistant_prefers_lowest_segment() {
    // The square's center is equally far from all four edges.
    let mut draft = draft_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert_eq!(draft.insert_near(ll(5.0, 5.0)), 1);
}

// =============================================================
// delete / move / translate
// =============================================================

#[test]
fn delete_removes_and_returns_vertex() {
    let mut draft = triangle();
    assert_eq!(draft.delete(1), Some(ll(10.0, 0.0)));
    assert_eq!(draft.vertices(), &[ll(0.0, 0.0), ll(10.0, 10.0)]);
}

#[test]
fn delete_out_of_range_is_none() {
    let mut draft = triangle();
    assert_eq!(draft.delete(3), None);
    assert_eq!(draft.len(), 3);
}

#[test]
fn move_vertex_replaces_in_place() {
    let mut draft = triangle();
    assert!(draft.move_vertex(2, ll(12.0, 11.0)));
    assert_eq!(draft.vertices()[2], ll(12.0, 11.0));
    assert!(!draft.move_vertex(9, ll(0.0, 0.0)));
}

#[test]
fn translate_preserves_edge_vectors() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let points: Vec<(f64, f64)> =
            (0..rng.random_range(3..9)).map(|_| (rng.random_range(-170.0..170.0), rng.random_range(-80.0..80.0))).collect();
        let mut draft = draft_of(&points);
        let before = draft.finalize(6).unwrap();
        let delta = Delta::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
        draft.translate(delta);
        let after = draft.finalize(6).unwrap();

        assert_eq!(before.ring.len(), after.ring.len());
        for i in 0..before.ring.len() {
            let moved = after.ring[i].delta_from(before.ring[i]);
            assert!((moved.dlng - delta.dlng).abs() <= 2e-6);
            assert!((moved.dlat - delta.dlat).abs() <= 2e-6);
        }
        for i in 0..before.ring.len() - 1 {
            let edge_before = before.ring[i + 1].delta_from(before.ring[i]);
            let edge_after = after.ring[i + 1].delta_from(after.ring[i]);
            assert!((edge_before.dlng - edge_after.dlng).abs() <= 2e-6);
            assert!((edge_before.dlat - edge_after.dlat).abs() <= 2e-6);
        }
    }
}

// =============================================================
// finalize
// =============================================================

#[test]
fn finalize_requires_three_vertices() {
    assert!(Draft::new().finalize(6).is_none());
    assert!(draft_of(&[(0.0, 0.0), (1.0, 1.0)]).finalize(6).is_none());
}

#[test]
fn finalize_closes_ring() {
    let polygon = triangle().finalize(6).unwrap();
    assert_eq!(polygon.ring.len(), 4);
    assert_eq!(polygon.ring.first(), polygon.ring.last());
}

#[test]
fn finalize_snaps_to_precision() {
    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<(f64, f64)> =
        (0..12).map(|_| (rng.random_range(-180.0..180.0), rng.random_range(-90.0..90.0))).collect();
    let draft = draft_of(&points);
    let polygon = draft.finalize(6).unwrap();

    assert_eq!(polygon.ring.len(), points.len() + 1);
    for (committed, original) in polygon.ring.iter().zip(draft.vertices()) {
        assert_eq!(round_to(committed.lng, 6), committed.lng);
        assert_eq!(round_to(committed.lat, 6), committed.lat);
        assert!((committed.lng - original.lng).abs() <= 0.5e-6 + 1e-12);
        assert!((committed.lat - original.lat).abs() <= 0.5e-6 + 1e-12);
    }
}

#[test]
fn finalize_does_not_mutate_draft() {
    let draft = draft_of(&[(0.123_456_789, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let _polygon = draft.finalize(6);
    assert_eq!(draft.vertices()[0].lng, 0.123_456_789);
}

// =============================================================
// snapshot / restore
// =============================================================

#[test]
fn snapshot_is_independent_of_later_edits() {
    let mut draft = triangle();
    let snap = draft.snapshot();
    draft.insert_near(ll(5.0, 0.1));
    draft.move_vertex(0, ll(-1.0, -1.0));
    assert_eq!(&*snap, &[ll(0.0, 0.0), ll(10.0, 0.0), ll(10.0, 10.0)]);
    draft.restore(snap);
    assert_eq!(draft, triangle());
}

// =============================================================
// Polygon / from_polygon
// =============================================================

#[test]
fn from_polygon_strips_closing_coordinate() {
    let polygon = Polygon::closed(&[ll(0.0, 0.0), ll(1.0, 0.0), ll(1.0, 1.0)]);
    let draft = Draft::from_polygon(&polygon).unwrap();
    assert_eq!(draft.len(), 3);
}

#[test]
fn from_polygon_accepts_open_ring() {
    let polygon = Polygon { ring: vec![ll(0.0, 0.0), ll(1.0, 0.0), ll(1.0, 1.0), ll(0.0, 1.0)] };
    let draft = Draft::from_polygon(&polygon).unwrap();
    assert_eq!(draft.len(), 4);
}

#[test]
fn from_polygon_rejects_too_few() {
    let polygon = Polygon::closed(&[ll(0.0, 0.0), ll(1.0, 0.0)]);
    assert_eq!(Draft::from_polygon(&polygon).unwrap_err(), EditorError::TooFewVertices { count: 2 });
}

#[test]
fn from_polygon_counts_distinct_vertices() {
    let collapsed = Polygon::closed(&[ll(1.0, 1.0), ll(1.0, 1.0), ll(1.0, 1.0)]);
    assert_eq!(Draft::from_polygon(&collapsed).unwrap_err(), EditorError::TooFewVertices { count: 1 });

    let repeated = Polygon { ring: vec![ll(0.0, 0.0), ll(1.0, 0.0), ll(1.0, 0.0), ll(0.0, 0.0)] };
    assert_eq!(Draft::from_polygon(&repeated).unwrap_err(), EditorError::TooFewVertices { count: 2 });
}

#[test]
fn from_polygon_keeps_duplicates_when_enough_distinct() {
    let polygon = Polygon { ring: vec![ll(0.0, 0.0), ll(1.0, 0.0), ll(1.0, 0.0), ll(1.0, 1.0)] };
    let draft = Draft::from_polygon(&polygon).unwrap();
    assert_eq!(draft.len(), 4);
}

#[test]
fn from_polygon_rejects_nan() {
    let polygon = Polygon::closed(&[ll(0.0, 0.0), ll(f64::NAN, 0.0), ll(1.0, 1.0)]);
    assert_eq!(Draft::from_polygon(&polygon).unwrap_err(), EditorError::NonFiniteCoordinate { index: 1 });
}

#[test]
fn polygon_serializes_ring() {
    let polygon = Polygon::closed(&[ll(0.0, 0.0), ll(1.0, 0.0), ll(1.0, 1.0)]);
    let json = serde_json::to_value(&polygon).unwrap();
    assert_eq!(json["ring"].as_array().unwrap().len(), 4);
    assert_eq!(json["ring"][3]["lng"], 0.0);
}
