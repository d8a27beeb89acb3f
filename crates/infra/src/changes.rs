use pharmacy_directory_domain::ID;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PharmacyChangeKind {
    Created,
    Updated,
    Deleted,
}

/// Notification that a stored `Pharmacy` changed. Subscribers are expected to
/// reload whatever they display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyChange {
    pub kind: PharmacyChangeKind,
    pub pharmacy_id: ID,
}

/// Fan-out of `PharmacyChange`s to every live subscriber.
///
/// Subscribers that fall more than `capacity` notifications behind skip the
/// oldest ones.
#[derive(Clone)]
pub struct PharmacyChangeFeed {
    sender: broadcast::Sender<PharmacyChange>,
}

impl PharmacyChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, change: PharmacyChange) {
        match self.sender.send(change) {
            Ok(receivers) => debug!("Pharmacy change delivered to {} subscribers", receivers),
            Err(broadcast::error::SendError(change)) => {
                debug!("No subscribers for pharmacy change: {:?}", change)
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PharmacyChange> {
        self.sender.subscribe()
    }
}

impl Default for PharmacyChangeFeed {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_delivers_changes_to_every_subscriber() {
        let feed = PharmacyChangeFeed::default();
        let mut first = feed.subscribe();
        let mut second = feed.subscribe();

        let change = PharmacyChange {
            kind: PharmacyChangeKind::Created,
            pharmacy_id: ID::new(),
        };
        feed.publish(change.clone());

        assert_eq!(first.recv().await.unwrap(), change);
        assert_eq!(second.recv().await.unwrap(), change);
    }

    #[tokio::test]
    async fn it_publishes_without_subscribers() {
        let feed = PharmacyChangeFeed::default();
        feed.publish(PharmacyChange {
            kind: PharmacyChangeKind::Deleted,
            pharmacy_id: ID::new(),
        });

        // Late subscribers only see what comes after they subscribed
        let mut late = feed.subscribe();
        let change = PharmacyChange {
            kind: PharmacyChangeKind::Updated,
            pharmacy_id: ID::new(),
        };
        feed.publish(change.clone());
        assert_eq!(late.recv().await.unwrap(), change);
    }
}
