use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc;

struct Shared<T> {
    value: T,
    subscribers: Vec<mpsc::Sender<T>>,
}

/// A value shared between its owner and the views that observe it.
///
/// Clones refer to the same value. Writes notify every live [`Subscription`]
/// when the value actually changes.
pub struct Binding<T> {
    inner: Rc<RefCell<Shared<T>>>,
}

impl<T: Copy + PartialEq> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Shared {
                value,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value
    }

    /// Store `value`. Returns whether it differed from the previous value.
    pub fn set(&self, value: T) -> bool {
        let mut shared = self.inner.borrow_mut();
        if shared.value == value {
            return false;
        }
        shared.value = value;
        shared.subscribers.retain(|tx| tx.send(value).is_ok());
        true
    }

    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::channel();
        self.inner.borrow_mut().subscribers.push(tx);
        Subscription { rx }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Binding<bool> {
    pub fn toggle(&self) -> bool {
        let value = !self.get();
        self.set(value);
        value
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.inner.borrow();
        f.debug_struct("Binding")
            .field("value", &shared.value)
            .field("subscribers", &shared.subscribers.len())
            .finish()
    }
}

/// Change notifications for one [`Binding`].
#[derive(Debug)]
pub struct Subscription<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> Subscription<T> {
    /// Drain pending notifications, keeping only the most recent one.
    pub fn latest(&self) -> Option<T> {
        self.rx.try_iter().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_value() {
        let binding = Binding::new(false);
        let other = binding.clone();

        other.set(true);
        assert!(binding.get());
    }

    #[test]
    fn notifies_only_on_change() {
        let binding = Binding::new(false);
        let changes = binding.subscribe();

        assert!(!binding.set(false));
        assert_eq!(changes.latest(), None);

        assert!(binding.set(true));
        assert_eq!(changes.latest(), Some(true));
        assert_eq!(changes.latest(), None);
    }

    #[test]
    fn latest_coalesces_pending_changes() {
        let binding = Binding::new(false);
        let changes = binding.subscribe();

        binding.toggle();
        binding.toggle();
        binding.toggle();
        assert_eq!(changes.latest(), Some(true));
    }

    #[test]
    fn dropped_subscriptions_are_pruned() {
        let binding = Binding::new(0u8);
        let kept = binding.subscribe();
        drop(binding.subscribe());
        assert_eq!(binding.subscriber_count(), 2);

        binding.set(1);
        assert_eq!(binding.subscriber_count(), 1);
        assert_eq!(kept.latest(), Some(1));
    }

    #[test]
    fn toggle_returns_new_value() {
        let binding = Binding::new(false);
        assert!(binding.toggle());
        assert!(!binding.toggle());
        assert!(!binding.get());
    }
}
