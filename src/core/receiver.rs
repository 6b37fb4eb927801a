use std::pin::pin;

use futures::{Stream, StreamExt};
use log::{debug, error, info};
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::config::ServerAddress;
use crate::core::feed::{FeedStatus, SnapshotPublisher};
use crate::core::proto::Battleground;
use crate::core::reader::open_battleground_stream;
use crate::types::WorldSnapshot;

#[derive(Debug, Error)]
pub enum ReceiverError {
    #[error("could not connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("could not stream battleground: {0}")]
    Open(tonic::Status),
    #[error("receiving battleground failed: {0}")]
    Receive(tonic::Status),
    #[error("receiver task aborted: {0}")]
    Aborted(String),
}

/// Publishes every message of `stream` as a fresh snapshot until the stream ends.
///
/// A clean end leaves the last published snapshot in place. Any error is
/// reported through the feed status before being returned.
pub async fn run_receiver<S>(
    stream: S,
    publisher: &mut SnapshotPublisher,
) -> Result<(), ReceiverError>
where
    S: Stream<Item = Result<Battleground, tonic::Status>>,
{
    let mut stream = pin!(stream);
    while let Some(message) = stream.next().await {
        match message {
            Ok(update) => {
                let snapshot = WorldSnapshot::from(update);
                debug!(
                    "update #{}: {} ships, {} bullets",
                    publisher.updates() + 1,
                    snapshot.ships.len(),
                    snapshot.bullets.len()
                );
                publisher.publish(snapshot);
            }
            Err(status) => {
                let err = ReceiverError::Receive(status);
                fail(publisher, &err);
                return Err(err);
            }
        }
    }

    info!("Battleground stream ended after {} updates", publisher.updates());
    publisher.set_status(FeedStatus::Ended);
    Ok(())
}

fn fail(publisher: &SnapshotPublisher, err: &ReceiverError) {
    error!("{}", err);
    publisher.set_status(FeedStatus::Failed(err.to_string()));
}

/// Running receiver task. Started once by [`spawn_receiver`].
pub struct ReceiverHandle {
    task: JoinHandle<Result<(), ReceiverError>>,
}

impl ReceiverHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancels the task if it is still running and waits for it to stop.
    /// Cancellation is not an error; a stream or connection failure is.
    pub async fn shutdown(self) -> Result<(), ReceiverError> {
        if !self.task.is_finished() {
            self.task.abort();
        }
        match self.task.await {
            Ok(outcome) => outcome,
            Err(join_err) if join_err.is_cancelled() => Ok(()),
            Err(join_err) => Err(ReceiverError::Aborted(join_err.to_string())),
        }
    }
}

pub fn spawn_receiver(address: ServerAddress, mut publisher: SnapshotPublisher) -> ReceiverHandle {
    let task = tokio::spawn(async move {
        let stream = match open_battleground_stream(&address).await {
            Ok(stream) => stream,
            Err(err) => {
                fail(&publisher, &err);
                return Err(err);
            }
        };
        run_receiver(stream, &mut publisher).await
    });
    ReceiverHandle { task }
}
