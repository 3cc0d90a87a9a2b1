// Chunk: docs/chunks/notification_bus - Explicit synchronous change notifications
//! Notifications emitted by the editor core.
//!
//! Components that care about edits (the viewport scroller, the host's
//! renderer, a blink effect) learn about them through these notifications
//! rather than by watching the rendered output. The bus is an ordinary value
//! owned by the `Editor`; there is no global emitter.
//!
//! Delivery is synchronous and in emission order. Each subscriber sees each
//! notification once, and a subscriber added later never sees earlier ones.

use std::fmt;

use caretpad_buffer::BufferChange;

use crate::caret::CaretPosition;

/// A change the core reports to its observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// The buffer was mutated: the edit kind and affected 0-based line
    BufferChanged(BufferChange),
    /// The caret moved to a new position
    CaretMoved(CaretPosition),
    /// Input went quiet for the settle delay
    Settled,
}

impl Notification {
    pub fn is_buffer_change(&self) -> bool {
        matches!(self, Notification::BufferChanged(_))
    }
}

/// Handle returned by [`NotificationBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&Notification)>;

/// Fan-out of notifications to registered closures.
#[derive(Default)]
pub struct NotificationBus {
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber. It receives every notification emitted from now on.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Delivers a notification to every subscriber in registration order.
    pub fn emit(&mut self, notification: &Notification) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(notification);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
