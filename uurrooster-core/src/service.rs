//! Single-owner store task.
//!
//! `StoreService::spawn` moves an `EventStore` into its own tokio task.
//! Every other task talks to it through a cloneable `StoreHandle`; commands
//! are processed one at a time in arrival order, so a load can never be
//! interleaved with another mutation.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::error::{UurroosterError, UurroosterResult};
use crate::event::Event;
use crate::store::EventStore;

const COMMAND_CHANNEL_SIZE: usize = 64;

enum StoreCommand {
    Add {
        event: Event,
        reply: oneshot::Sender<String>,
    },
    Update {
        event: Event,
        reply: oneshot::Sender<bool>,
    },
    Delete {
        id: String,
        reply: oneshot::Sender<usize>,
    },
    Get {
        id: String,
        reply: oneshot::Sender<Option<Event>>,
    },
    List {
        reply: oneshot::Sender<Vec<Event>>,
    },
    Load {
        reply: oneshot::Sender<UurroosterResult<usize>>,
    },
}

pub struct StoreService;

impl StoreService {
    /// Spawn the owning task. It stops once every handle is dropped.
    pub fn spawn(store: EventStore) -> StoreHandle {
        let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
        tokio::spawn(command_processor_task(store, rx));
        StoreHandle { tx }
    }
}

#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreCommand>,
}

impl StoreHandle {
    pub async fn add_event(&self, event: Event) -> UurroosterResult<String> {
        self.request(|reply| StoreCommand::Add { event, reply }).await
    }

    pub async fn update_event(&self, event: Event) -> UurroosterResult<bool> {
        self.request(|reply| StoreCommand::Update { event, reply })
            .await
    }

    pub async fn delete_event(&self, id: impl Into<String>) -> UurroosterResult<usize> {
        let id = id.into();
        self.request(|reply| StoreCommand::Delete { id, reply }).await
    }

    pub async fn get_event(&self, id: impl Into<String>) -> UurroosterResult<Option<Event>> {
        let id = id.into();
        self.request(|reply| StoreCommand::Get { id, reply }).await
    }

    /// Snapshot of the schedule in display order
    pub async fn events(&self) -> UurroosterResult<Vec<Event>> {
        self.request(|reply| StoreCommand::List { reply }).await
    }

    /// The outer error means the service is gone; the inner one is the
    /// load result itself.
    pub async fn load_data(&self) -> UurroosterResult<UurroosterResult<usize>> {
        self.request(|reply| StoreCommand::Load { reply }).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> StoreCommand,
    ) -> UurroosterResult<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| UurroosterError::StoreClosed)?;
        rx.await.map_err(|_| UurroosterError::StoreClosed)
    }
}

async fn command_processor_task(mut store: EventStore, mut rx: mpsc::Receiver<StoreCommand>) {
    while let Some(command) = rx.recv().await {
        // A dropped reply receiver just means the caller stopped waiting.
        match command {
            StoreCommand::Add { event, reply } => {
                let _ = reply.send(store.add_event(event));
            }
            StoreCommand::Update { event, reply } => {
                let _ = reply.send(store.update_event(&event));
            }
            StoreCommand::Delete { id, reply } => {
                let _ = reply.send(store.delete_event(&id));
            }
            StoreCommand::Get { id, reply } => {
                let _ = reply.send(store.get_event(&id).cloned());
            }
            StoreCommand::List { reply } => {
                let _ = reply.send(store.events().to_vec());
            }
            StoreCommand::Load { reply } => {
                let _ = reply.send(store.load_data().await);
            }
        }
    }
    debug!("Store service stopped");
}
