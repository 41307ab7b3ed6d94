//! Subscribable value cells: the editor's output ports.

#[cfg(test)]
#[path = "port_test.rs"]
mod port_test;

use uuid::Uuid;

/// Handle for removing a port subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

/// A value owned by the editor and observed by downstream subscribers.
///
/// Subscribers are called on `set` only when the value actually changes.
pub struct Published<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T: PartialEq> Published<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, subscribers: Vec::new() }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a subscriber. It is called once immediately with the current value.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        subscriber(&self.value);
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replace the value, notifying subscribers if it changed. Returns whether it changed.
    pub(crate) fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
        true
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Published<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Published")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
