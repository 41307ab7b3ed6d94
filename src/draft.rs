//! Geometry store: the open vertex ring being edited and the closed polygon it
//! commits to.
//!
//! The draft never repeats its first vertex. Closing happens only in
//! [`Draft::finalize`], which also snaps coordinates to the commit precision;
//! interactive edits keep full precision so dragged vertices do not jitter.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_POLYGON_VERTICES;
use crate::error::EditorError;
use crate::geom::{Delta, LngLat, distance_to_segment};

/// A committed polygon: a single closed ring whose last coordinate equals its first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub ring: Vec<LngLat>,
}

impl Polygon {
    /// Build a polygon from an open vertex list, closing the ring.
    #[must_use]
    pub fn closed(vertices: &[LngLat]) -> Self {
        let mut ring = vertices.to_vec();
        if let Some(first) = vertices.first() {
            ring.push(*first);
        }
        Self { ring }
    }

    /// Vertices without the closing coordinate.
    #[must_use]
    pub fn open_vertices(&self) -> &[LngLat] {
        match self.ring.split_last() {
            Some((last, rest)) if rest.first() == Some(last) => rest,
            _ => &self.ring,
        }
    }
}

/// The in-progress vertex list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    vertices: Vec<LngLat>,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a draft from an existing polygon, closed or open.
    pub fn from_polygon(polygon: &Polygon) -> Result<Self, EditorError> {
        let vertices = polygon.open_vertices();
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(EditorError::NonFiniteCoordinate { index });
        }
        let distinct = vertices.iter().enumerate().filter(|&(i, v)| !vertices[..i].contains(v)).count();
        if distinct < MIN_POLYGON_VERTICES {
            return Err(EditorError::TooFewVertices { count: distinct });
        }
        Ok(Self { vertices: vertices.to_vec() })
    }

    #[must_use]
    pub fn vertices(&self) -> &[LngLat] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Capture an immutable copy for the undo history.
    #[must_use]
    pub fn snapshot(&self) -> Box<[LngLat]> {
        self.vertices.clone().into_boxed_slice()
    }

    /// Replace the whole vertex list with a snapshot.
    pub fn restore(&mut self, snapshot: Box<[LngLat]>) {
        self.vertices = snapshot.into_vec();
    }

    /// Edge segments as `(start_index, start, end)`, including the closing edge
    /// once there are at least three vertices.
    pub fn edges(&self) -> impl Iterator<Item = (usize, LngLat, LngLat)> + '_ {
        let n = self.vertices.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..count).map(move |i| (i, self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Insert `cursor` into the edge closest to it and return the new index.
    ///
    /// With fewer than two vertices there are no edges and the vertex is appended.
    /// Equidistant edges resolve to the lowest segment index.
    pub fn insert_near(&mut self, cursor: LngLat) -> usize {
        let mut best: Option<(usize, f64)> = None;
        for (i, a, b) in self.edges() {
            let d = distance_to_segment(cursor, a, b);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        let index = match best {
            Some((segment, _)) => segment + 1,
            None => self.vertices.len(),
        };
        self.vertices.insert(index, cursor);
        index
    }

    /// Remove the vertex at `index`, if it exists.
    pub fn delete(&mut self, index: usize) -> Option<LngLat> {
        (index < self.vertices.len()).then(|| self.vertices.remove(index))
    }

    /// Replace the vertex at `index`. Returns false if out of range.
    pub fn move_vertex(&mut self, index: usize, position: LngLat) -> bool {
        let Some(vertex) = self.vertices.get_mut(index) else {
            return false;
        };
        *vertex = position;
        true
    }

    /// Translate every vertex by `delta`.
    pub fn translate(&mut self, delta: Delta) {
        for vertex in &mut self.vertices {
            *vertex = vertex.offset(delta);
        }
    }

    /// Commit the draft into a closed, snapped polygon, or `None` when too small.
    #[must_use]
    pub fn finalize(&self, precision: u32) -> Option<Polygon> {
        if !self.is_valid() {
            return None;
        }
        let snapped: Vec<LngLat> = self.vertices.iter().map(|v| v.snapped(precision)).collect();
        Some(Polygon::closed(&snapped))
    }
}
