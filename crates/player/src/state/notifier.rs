//! Change notification for the rendering surface.
//!
//! Push-based: subscribers register callbacks that are invoked, in
//! subscription order, after every state change. The notifier holds the
//! callbacks until they are unsubscribed or the notifier is dropped.

use monsterdex_domain::MonsterId;

use super::form_session::{FieldErrors, FormField};

/// What changed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardChange {
    RecordAdded(MonsterId),
    ExpansionChanged(Option<MonsterId>),
    DraftEdited(FormField),
    FormOpened,
    FormClosed,
    ValidationFailed(FieldErrors),
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&BoardChange) + 'static>;

#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&BoardChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn notify(&mut self, change: &BoardChange) {
        tracing::trace!(?change, subscribers = self.subscribers.len(), "Board changed");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(change);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = Rc::clone(&seen);
        notifier.subscribe(move |c| first.borrow_mut().push(("first", c.clone())));
        let second = Rc::clone(&seen);
        notifier.subscribe(move |c| second.borrow_mut().push(("second", c.clone())));

        notifier.notify(&BoardChange::FormOpened);

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", BoardChange::FormOpened),
                ("second", BoardChange::FormOpened)
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut notifier = ChangeNotifier::new();

        let counter = Rc::clone(&count);
        let id = notifier.subscribe(move |_| *counter.borrow_mut() += 1);
        notifier.notify(&BoardChange::FormClosed);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify(&BoardChange::FormClosed);

        assert_eq!(*count.borrow(), 1);
        assert!(notifier.subscribers.is_empty());
    }
}
