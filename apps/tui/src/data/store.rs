use tokio::sync::watch;

/// Holds the most recently published value.
///
/// New subscribers see the current value first, if there is one, followed by
/// every later publish. Intermediate values a slow subscriber misses are
/// dropped; only the latest is ever delivered.
#[derive(Debug)]
pub struct LatestValue<T> {
    sender: watch::Sender<Option<T>>,
}

impl<T> Default for LatestValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestValue<T> {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Replaces the held value and wakes every subscriber.
    pub fn publish(&self, value: T) {
        self.sender.send_replace(Some(value));
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
            primed: false,
        }
    }
}

impl<T: Clone> LatestValue<T> {
    pub fn get(&self) -> Option<T> {
        self.sender.borrow().clone()
    }
}

/// A receiver handed out by [`LatestValue::subscribe`].
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: watch::Receiver<Option<T>>,
    primed: bool,
}

impl<T: Clone> Subscription<T> {
    /// Waits for the next value. The first call returns the current value
    /// immediately when one exists. Returns `None` once the holder is dropped.
    pub async fn next(&mut self) -> Option<T> {
        if !std::mem::replace(&mut self.primed, true) {
            if let Some(value) = self.receiver.borrow_and_update().clone() {
                return Some(value);
            }
        }

        loop {
            self.receiver.changed().await.ok()?;
            if let Some(value) = self.receiver.borrow_and_update().clone() {
                return Some(value);
            }
        }
    }

    /// Whether a value newer than the last one returned is waiting.
    pub fn has_update(&self) -> bool {
        let pending = self.receiver.borrow().is_some();
        pending && (!self.primed || self.receiver.has_changed().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[test]
    fn get_is_empty_until_published() {
        let latest = LatestValue::new();
        assert_eq!(latest.get(), None);

        latest.publish(1);
        latest.publish(2);
        assert_eq!(latest.get(), Some(2));
    }

    #[tokio::test]
    async fn late_subscriber_receives_current_value() -> Result<(), Box<dyn std::error::Error>> {
        let latest = LatestValue::new();
        latest.publish("first");
        latest.publish("second");

        let mut subscription = latest.subscribe();
        assert!(subscription.has_update());
        assert_eq!(subscription.next().await, Some("second"));
        assert!(!subscription.has_update());

        latest.publish("third");
        assert!(subscription.has_update());
        let next = timeout(Duration::from_secs(1), subscription.next()).await?;
        assert_eq!(next, Some("third"));

        Ok(())
    }

    #[tokio::test]
    async fn empty_holder_emits_nothing() {
        let latest = LatestValue::<u8>::new();
        let mut subscription = latest.subscribe();

        assert!(!subscription.has_update());
        let waited = timeout(Duration::from_millis(20), subscription.next()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn dropping_the_holder_ends_subscriptions() {
        let latest = LatestValue::<u8>::new();
        let mut subscription = latest.subscribe();
        drop(latest);

        assert_eq!(subscription.next().await, None);
    }
}
