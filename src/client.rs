//! Persistence Client
//!
//! Sole owner of the database connection. All reads and writes to items,
//! lists and their relationship go through here, and every successful
//! mutation is published on the change channel.

use std::path::Path;

use tokio::sync::broadcast;

use crate::config::DbConfig;
use crate::domain::{DbResult, Item, ItemFields, ItemList, ListFields};
use crate::events::{ChangeEvent, ChangeNotifier};
use crate::repository::{init_db, DbState, ItemRepository, ListRepository, Repository};

pub struct DbClient {
    _state: DbState,
    items: ItemRepository,
    lists: ListRepository,
    notifier: ChangeNotifier,
}

impl DbClient {
    /// Open (or create) the store described by `config` and apply the
    /// schema.
    pub async fn open(config: &DbConfig) -> DbResult<Self> {
        Self::open_at(&config.db_path).await
    }

    /// Open (or create) the store at an explicit path
    pub async fn open_at(db_path: &Path) -> DbResult<Self> {
        let state = init_db(db_path).await?;
        let conn = state.connection();
        let notifier = ChangeNotifier::new();

        Ok(Self {
            items: ItemRepository::new(conn.clone(), notifier.clone()),
            lists: ListRepository::new(conn, notifier.clone()),
            notifier,
            _state: state,
        })
    }

    /// In-memory store, used by tests
    pub async fn open_in_memory() -> DbResult<Self> {
        Self::open_at(Path::new(":memory:")).await
    }

    /// Attach a change subscriber. It receives every event published
    /// after this call, never history.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    // ========================
    // Lists
    // ========================

    pub async fn list_lists(&self) -> DbResult<Vec<ItemList>> {
        self.lists.list().await
    }

    pub async fn get_list(&self, id: u32) -> DbResult<Option<ItemList>> {
        self.lists.find_by_id(id).await
    }

    pub async fn create_list(&self, fields: ListFields, item_ids: &[u32]) -> DbResult<ItemList> {
        self.lists.create_with_items(&fields, item_ids).await
    }

    /// Replace a list's fields and its complete association set
    pub async fn update_list(
        &self,
        id: u32,
        fields: ListFields,
        item_ids: &[u32],
    ) -> DbResult<ItemList> {
        self.lists.update_with_items(id, &fields, item_ids).await
    }

    pub async fn delete_list(&self, id: u32) -> DbResult<()> {
        self.lists.delete(id).await
    }

    // ========================
    // Items
    // ========================

    pub async fn list_all_items(&self) -> DbResult<Vec<Item>> {
        self.items.list().await
    }

    pub async fn list_items_in_list(&self, list_id: u32) -> DbResult<Vec<Item>> {
        self.items.list_in_list(list_id).await
    }

    pub async fn get_item(&self, id: u32) -> DbResult<Option<Item>> {
        self.items.find_by_id(id).await
    }

    pub async fn create_item(&self, fields: ItemFields, list_ids: &[u32]) -> DbResult<Item> {
        self.items.create_in_lists(&fields, list_ids).await
    }

    /// Full replace of the item's mutable fields
    pub async fn update_item(&self, id: u32, fields: ItemFields) -> DbResult<Item> {
        self.items.update(&Item::from_fields(id, fields)).await
    }

    /// Delete the item everywhere; its relationship rows cascade
    pub async fn delete_item(&self, id: u32) -> DbResult<()> {
        self.items.delete(id).await
    }

    /// Remove the item from one list only
    pub async fn delete_item_from_list(&self, item_id: u32, list_id: u32) -> DbResult<()> {
        self.items.remove_from_list(item_id, list_id).await
    }
}
