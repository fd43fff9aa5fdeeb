//! Item Form
//!
//! Collects name, description and list membership for a new item, or new
//! field values for an existing one. Creation associates the item with
//! every selected list; editing replaces the item's fields only.

use crate::client::DbClient;
use crate::domain::{DbResult, Item, ItemFields};
use super::{normalized_description, validated_name};

#[derive(Default)]
pub struct ItemForm {
    name: String,
    description: String,
    list_ids: Vec<u32>,
    item_to_update: Option<Item>,
}

impl ItemForm {
    /// Blank creation form
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit form prefilled from the existing item
    pub fn editing(item: Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            list_ids: Vec::new(),
            item_to_update: Some(item),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the set of lists the new item will belong to
    pub fn select_lists(&mut self, list_ids: Vec<u32>) {
        self.list_ids = list_ids;
    }

    /// Validate the current input into persistable fields
    pub fn validate(&self) -> DbResult<ItemFields> {
        Ok(ItemFields {
            name: validated_name(&self.name)?,
            description: normalized_description(&self.description),
        })
    }

    /// Validate and persist; returns the stored item for optimistic
    /// view updates.
    pub async fn submit(&self, client: &DbClient) -> DbResult<Item> {
        let fields = self.validate()?;
        match &self.item_to_update {
            None => client.create_item(fields, &self.list_ids).await,
            Some(previous) => client.update_item(previous.id, fields).await,
        }
    }
}
