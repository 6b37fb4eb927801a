//! Hand-off of world snapshots from the receiver task to the render loop.
//!
//! The slot holds an `Arc<WorldSnapshot>`. Publishing swaps in a freshly built
//! snapshot; reading clones the `Arc` and releases the slot immediately, so a
//! frame keeps one immutable snapshot for its whole duration and neither side
//! waits on the other beyond the pointer copy.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::types::WorldSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Streaming { updates: u64 },
    Ended,
    Failed(String),
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Connecting => write!(f, "Connecting..."),
            FeedStatus::Streaming { updates } => write!(f, "Streaming ({updates} updates)"),
            FeedStatus::Ended => write!(f, "Stream ended"),
            FeedStatus::Failed(reason) => write!(f, "Stream failed: {reason}"),
        }
    }
}

/// Writer side. Owned by the receiver task.
pub struct SnapshotPublisher {
    snapshots: watch::Sender<Arc<WorldSnapshot>>,
    status: watch::Sender<FeedStatus>,
    updates: u64,
}

/// Reader side. Owned by the render loop.
pub struct SnapshotFeed {
    snapshots: watch::Receiver<Arc<WorldSnapshot>>,
    status: watch::Receiver<FeedStatus>,
}

pub fn feed() -> (SnapshotPublisher, SnapshotFeed) {
    let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(WorldSnapshot::default()));
    let (status_tx, status_rx) = watch::channel(FeedStatus::Connecting);
    (
        SnapshotPublisher {
            snapshots: snapshot_tx,
            status: status_tx,
            updates: 0,
        },
        SnapshotFeed {
            snapshots: snapshot_rx,
            status: status_rx,
        },
    )
}

impl SnapshotPublisher {
    /// Replaces the current snapshot. Never blocks on the reader and succeeds
    /// even once the reader has been dropped.
    pub fn publish(&mut self, snapshot: WorldSnapshot) {
        self.snapshots.send_replace(Arc::new(snapshot));
        self.updates = self.updates.saturating_add(1);
        self.status.send_replace(FeedStatus::Streaming {
            updates: self.updates,
        });
    }

    pub fn set_status(&self, status: FeedStatus) {
        self.status.send_replace(status);
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl SnapshotFeed {
    /// Most recent complete snapshot.
    pub fn latest(&mut self) -> Arc<WorldSnapshot> {
        Arc::clone(&self.snapshots.borrow_and_update())
    }

    pub fn status(&self) -> FeedStatus {
        self.status.borrow().clone()
    }
}
