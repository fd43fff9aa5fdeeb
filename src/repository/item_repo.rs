//! Item Repository Implementation
//!
//! SQLite-backed implementation of Repository<Item> plus the item side
//! of the item-list relationship. Every successful mutation is published
//! to the change notifier after its transaction commits.

use async_trait::async_trait;
use libsql::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DbError, DbResult, Item, ItemFields};
use crate::events::{ChangeEvent, ChangeNotifier};
use super::traits::Repository;

/// SQLite implementation of the item repository
pub struct ItemRepository {
    conn: Arc<Mutex<Connection>>,
    notifier: ChangeNotifier,
}

impl ItemRepository {
    pub fn new(conn: Arc<Mutex<Connection>>, notifier: ChangeNotifier) -> Self {
        Self { conn, notifier }
    }

    /// Create an item and associate it with each of `list_ids`.
    ///
    /// The item insert and all relationship inserts run in one
    /// transaction: a failed association (e.g. an unknown list id) rolls
    /// the whole creation back.
    pub async fn create_in_lists(&self, fields: &ItemFields, list_ids: &[u32]) -> DbResult<Item> {
        let id = {
            let conn = self.conn.lock().await;
            let tx = conn
                .transaction()
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;

            tx.execute(
                "INSERT INTO items (name, description) VALUES (?, ?)",
                libsql::params![fields.name.clone(), fields.description.clone()],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

            let id = tx.last_insert_rowid() as u32;

            for &list_id in list_ids {
                tx.execute(
                    "INSERT INTO items_lists (item_id, list_id) VALUES (?, ?)",
                    libsql::params![id, list_id],
                )
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
            }

            tx.commit()
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
            id
        };

        let item = Item::from_fields(id, fields.clone());
        log::debug!("created item {} in {} list(s)", item.id, list_ids.len());
        self.notifier.publish(ChangeEvent::ItemCreated {
            item: item.clone(),
            list_ids: list_ids.to_vec(),
        });
        Ok(item)
    }

    /// All items associated with a list, via the join table.
    /// Empty when nothing is associated.
    pub async fn list_in_list(&self, list_id: u32) -> DbResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                "SELECT i.id, i.name, i.description FROM items i
                 JOIN items_lists il ON i.id = il.item_id
                 WHERE il.list_id = ?
                 ORDER BY i.id",
                libsql::params![list_id],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

        let mut items = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    /// Remove an item from one list only. The item row (and its other
    /// associations) are untouched.
    pub async fn remove_from_list(&self, item_id: u32, list_id: u32) -> DbResult<()> {
        let affected = {
            let conn = self.conn.lock().await;
            conn.execute(
                "DELETE FROM items_lists WHERE item_id = ? AND list_id = ?",
                libsql::params![item_id, list_id],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?
        };

        if affected == 0 {
            return Err(DbError::NotFound(format!(
                "item {} is not in list {}",
                item_id, list_id
            )));
        }

        self.notifier
            .publish(ChangeEvent::ItemRemovedFromList { item_id, list_id });
        Ok(())
    }
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    async fn create(&self, entity: &Item) -> DbResult<Item> {
        self.create_in_lists(&entity.fields(), &[]).await
    }

    async fn find_by_id(&self, id: u32) -> DbResult<Option<Item>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                "SELECT id, name, description FROM items WHERE id = ?",
                libsql::params![id],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_item(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DbResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query("SELECT id, name, description FROM items ORDER BY id", ())
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

        let mut items = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    async fn update(&self, entity: &Item) -> DbResult<Item> {
        let affected = {
            let conn = self.conn.lock().await;
            conn.execute(
                "UPDATE items SET name = ?, description = ? WHERE id = ?",
                libsql::params![
                    entity.name.clone(),
                    entity.description.clone(),
                    entity.id
                ],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?
        };

        if affected == 0 {
            return Err(DbError::NotFound(format!("item {} not found", entity.id)));
        }

        self.notifier.publish(ChangeEvent::ItemUpdated {
            item: entity.clone(),
        });
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DbResult<()> {
        {
            let conn = self.conn.lock().await;
            // Relationship rows cascade
            conn.execute("DELETE FROM items WHERE id = ?", libsql::params![id])
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
        }

        self.notifier.publish(ChangeEvent::ItemDeleted { id });
        Ok(())
    }
}

/// Convert a database row to Item
fn row_to_item(row: &libsql::Row) -> DbResult<Item> {
    Ok(Item {
        id: row
            .get::<u32>(0)
            .map_err(|e| DbError::Query(e.to_string()))?,
        name: row
            .get::<String>(1)
            .map_err(|e| DbError::Query(e.to_string()))?,
        description: row.get::<Option<String>>(2).ok().flatten(),
    })
}
