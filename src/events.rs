//! Change Notification
//!
//! A process-wide publish/subscribe channel the persistence client uses
//! to tell live views about mutations. Delivery is "events after you
//! attach": a subscriber never sees history, and every subscriber gets
//! its own copy of each event. Nothing here is persisted or shared
//! across processes.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::domain::{Item, ItemList};

/// Events published after each successful mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChangeEvent {
    ItemCreated { item: Item, list_ids: Vec<u32> },
    ItemUpdated { item: Item },
    ItemDeleted { id: u32 },
    /// The item was removed from one list only; its row and other
    /// associations survive.
    ItemRemovedFromList { item_id: u32, list_id: u32 },
    ListCreated { list: ItemList, item_ids: Vec<u32> },
    ListUpdated { list: ItemList, item_ids: Vec<u32> },
    ListDeleted { id: u32 },
}

/// Buffered events per subscriber before the oldest are dropped.
/// Views patch synchronously, so the buffer only has to absorb bursts.
const CHANNEL_CAPACITY: usize = 64;

/// Cloneable handle to the change channel.
///
/// Owned by the persistence client; repositories publish through clones
/// of it.
#[derive(Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Attach a subscriber. It will receive every event published after
    /// this call and none published before.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all current subscribers. With no subscribers
    /// the event is dropped.
    pub fn publish(&self, event: ChangeEvent) {
        log::debug!("change event: {:?}", event);
        let _ = self.tx.send(event);
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
