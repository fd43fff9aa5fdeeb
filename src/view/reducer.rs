//! View Reconciliation Reducers
//!
//! Pure functions that patch a materialized sequence from a change
//! event, so views update in place instead of re-querying the store.
//! Events outside a view's scope, and patches whose target is absent,
//! leave the sequence unchanged.

use crate::domain::{Item, ItemList};
use crate::events::ChangeEvent;

/// Patch the item sequence of the view scoped to `list_id`
pub fn reduce_items(mut items: Vec<Item>, list_id: u32, event: &ChangeEvent) -> Vec<Item> {
    match event {
        ChangeEvent::ItemCreated { item, list_ids } => {
            if list_ids.contains(&list_id) {
                items.push(item.clone());
            }
        }
        ChangeEvent::ItemUpdated { item } => {
            if let Some(slot) = items.iter_mut().find(|i| i.id == item.id) {
                *slot = item.clone();
            }
        }
        ChangeEvent::ItemDeleted { id } => {
            items.retain(|i| i.id != *id);
        }
        ChangeEvent::ItemRemovedFromList { item_id, list_id: removed_from } => {
            if *removed_from == list_id {
                items.retain(|i| i.id != *item_id);
            }
        }
        _ => {}
    }
    items
}

/// Patch the sequence of a list-of-lists view
pub fn reduce_lists(mut lists: Vec<ItemList>, event: &ChangeEvent) -> Vec<ItemList> {
    match event {
        ChangeEvent::ListCreated { list, .. } => {
            lists.push(list.clone());
        }
        ChangeEvent::ListUpdated { list, .. } => {
            if let Some(slot) = lists.iter_mut().find(|l| l.id == list.id) {
                *slot = list.clone();
            }
        }
        ChangeEvent::ListDeleted { id } => {
            lists.retain(|l| l.id != *id);
        }
        _ => {}
    }
    lists
}
