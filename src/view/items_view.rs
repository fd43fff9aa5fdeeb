//! Per-List Item View
//!
//! Materialized copy of one list's items. After the initial load it is
//! kept current by feeding it change events; it never re-queries.

use crate::client::DbClient;
use crate::domain::{DbResult, Item};
use crate::events::ChangeEvent;
use super::reducer::reduce_items;

pub struct ItemsView {
    list_id: u32,
    items: Vec<Item>,
}

impl ItemsView {
    /// Empty view scoped to `list_id`
    pub fn new(list_id: u32) -> Self {
        Self {
            list_id,
            items: Vec::new(),
        }
    }

    /// Fetch the list's current items once, through the client
    pub async fn load(client: &DbClient, list_id: u32) -> DbResult<Self> {
        let items = client.list_items_in_list(list_id).await?;
        Ok(Self { list_id, items })
    }

    /// Patch the local sequence from a change event. Events outside this
    /// view's scope are ignored.
    pub fn apply(&mut self, event: &ChangeEvent) {
        self.items = reduce_items(std::mem::take(&mut self.items), self.list_id, event);
    }

    pub fn list_id(&self) -> u32 {
        self.list_id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
