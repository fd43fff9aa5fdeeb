//! List Repository Implementation
//!
//! SQLite-backed operations for lists and the list side of the item-list
//! relationship. List updates use set-replacement semantics: the caller
//! supplies the complete set of associated item ids and the previous
//! associations are dropped wholesale.

use libsql::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DbError, DbResult, ItemList, ListFields};
use crate::events::{ChangeEvent, ChangeNotifier};

/// SQLite implementation of the list repository
pub struct ListRepository {
    conn: Arc<Mutex<Connection>>,
    notifier: ChangeNotifier,
}

impl ListRepository {
    pub fn new(conn: Arc<Mutex<Connection>>, notifier: ChangeNotifier) -> Self {
        Self { conn, notifier }
    }

    /// List all lists
    pub async fn list(&self) -> DbResult<Vec<ItemList>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query("SELECT id, name, icon_name FROM lists ORDER BY id", ())
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

        let mut lists = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            lists.push(row_to_list(&row)?);
        }
        Ok(lists)
    }

    /// Find a list by ID
    pub async fn find_by_id(&self, id: u32) -> DbResult<Option<ItemList>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                "SELECT id, name, icon_name FROM lists WHERE id = ?",
                libsql::params![id],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_list(&row)?))
        } else {
            Ok(None)
        }
    }

    /// Create a list and associate it with each of `item_ids`, in one
    /// transaction.
    pub async fn create_with_items(
        &self,
        fields: &ListFields,
        item_ids: &[u32],
    ) -> DbResult<ItemList> {
        let id = {
            let conn = self.conn.lock().await;
            let tx = conn
                .transaction()
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;

            tx.execute(
                "INSERT INTO lists (name, icon_name) VALUES (?, ?)",
                libsql::params![fields.name.clone(), fields.icon_name.clone()],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

            let id = tx.last_insert_rowid() as u32;

            for &item_id in item_ids {
                tx.execute(
                    "INSERT INTO items_lists (item_id, list_id) VALUES (?, ?)",
                    libsql::params![item_id, id],
                )
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
            }

            tx.commit()
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
            id
        };

        let list = ItemList::from_fields(id, fields.clone());
        log::debug!("created list {} with {} item(s)", list.id, item_ids.len());
        self.notifier.publish(ChangeEvent::ListCreated {
            list: list.clone(),
            item_ids: item_ids.to_vec(),
        });
        Ok(list)
    }

    /// Replace a list's fields and its full association set.
    ///
    /// All existing relationship rows for the list are deleted and one
    /// row per `item_ids` entry inserted, inside one transaction. Calling
    /// twice with the same `item_ids` leaves exactly that set associated.
    pub async fn update_with_items(
        &self,
        id: u32,
        fields: &ListFields,
        item_ids: &[u32],
    ) -> DbResult<ItemList> {
        {
            let conn = self.conn.lock().await;
            let tx = conn
                .transaction()
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;

            let affected = tx
                .execute(
                    "UPDATE lists SET name = ?, icon_name = ? WHERE id = ?",
                    libsql::params![fields.name.clone(), fields.icon_name.clone(), id],
                )
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;

            if affected == 0 {
                return Err(DbError::NotFound(format!("list {} not found", id)));
            }

            tx.execute(
                "DELETE FROM items_lists WHERE list_id = ?",
                libsql::params![id],
            )
            .await
            .map_err(|e| DbError::Query(e.to_string()))?;

            for &item_id in item_ids {
                tx.execute(
                    "INSERT INTO items_lists (item_id, list_id) VALUES (?, ?)",
                    libsql::params![item_id, id],
                )
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
            }

            tx.commit()
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
        }

        let list = ItemList::from_fields(id, fields.clone());
        self.notifier.publish(ChangeEvent::ListUpdated {
            list: list.clone(),
            item_ids: item_ids.to_vec(),
        });
        Ok(list)
    }

    /// Delete a list. Relationship rows cascade; item rows are untouched.
    pub async fn delete(&self, id: u32) -> DbResult<()> {
        {
            let conn = self.conn.lock().await;
            conn.execute("DELETE FROM lists WHERE id = ?", libsql::params![id])
                .await
                .map_err(|e| DbError::Query(e.to_string()))?;
        }

        self.notifier.publish(ChangeEvent::ListDeleted { id });
        Ok(())
    }
}

/// Convert a database row to ItemList
fn row_to_list(row: &libsql::Row) -> DbResult<ItemList> {
    Ok(ItemList {
        id: row
            .get::<u32>(0)
            .map_err(|e| DbError::Query(e.to_string()))?,
        name: row
            .get::<String>(1)
            .map_err(|e| DbError::Query(e.to_string()))?,
        icon_name: row.get::<Option<String>>(2).ok().flatten(),
    })
}
