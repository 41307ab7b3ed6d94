//! Listener registries for the three editor outcomes.
//!
//! `success` and `updated` receive the committed polygon; `failure` means no
//! polygon was produced, whether from a cancel or a finish with too few
//! vertices. Listeners run in registration order.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use uuid::Uuid;

use crate::draft::Polygon;

/// Handle returned on registration, used to remove a single listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

type PolygonHandler = Box<dyn FnMut(&Polygon)>;
type FailureHandler = Box<dyn FnMut()>;

#[derive(Default)]
pub struct Listeners {
    success: Vec<(ListenerId, PolygonHandler)>,
    updated: Vec<(ListenerId, PolygonHandler)>,
    failure: Vec<(ListenerId, FailureHandler)>,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(&mut self, handler: impl FnMut(&Polygon) + 'static) -> ListenerId {
        let id = ListenerId::new();
        self.success.push((id, Box::new(handler)));
        id
    }

    pub fn on_updated(&mut self, handler: impl FnMut(&Polygon) + 'static) -> ListenerId {
        let id = ListenerId::new();
        self.updated.push((id, Box::new(handler)));
        id
    }

    pub fn on_failure(&mut self, handler: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId::new();
        self.failure.push((id, Box::new(handler)));
        id
    }

    /// Remove one listener from whichever registry holds it. Returns false if unknown.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.len();
        self.success.retain(|(lid, _)| *lid != id);
        self.updated.retain(|(lid, _)| *lid != id);
        self.failure.retain(|(lid, _)| *lid != id);
        self.len() != before
    }

    pub fn clear(&mut self) {
        self.success.clear();
        self.updated.clear();
        self.failure.clear();
    }

    /// Total registered listeners across all three registries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.success.len() + self.updated.len() + self.failure.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn emit_success(&mut self, polygon: &Polygon) {
        for (_, handler) in &mut self.success {
            handler(polygon);
        }
    }

    pub(crate) fn emit_updated(&mut self, polygon: &Polygon) {
        for (_, handler) in &mut self.updated {
            handler(polygon);
        }
    }

    pub(crate) fn emit_failure(&mut self) {
        for (_, handler) in &mut self.failure {
            handler();
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("success", &self.success.len())
            .field("updated", &self.updated.len())
            .field("failure", &self.failure.len())
            .finish()
    }
}
