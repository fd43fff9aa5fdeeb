//! List Form
//!
//! Collects a list's name, icon and member items. Both creation and
//! editing take the complete member set; the store applies it with
//! set-replacement semantics.

use crate::client::DbClient;
use crate::domain::{DbResult, ItemList, ListFields};
use crate::icons::{get_icon_data, IconDef};
use super::validated_name;

#[derive(Default)]
pub struct ListForm {
    name: String,
    icon: Option<&'static IconDef>,
    item_ids: Vec<u32>,
    list_to_update: Option<ItemList>,
}

impl ListForm {
    /// Blank creation form
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit form prefilled from the existing list
    pub fn editing(list: ItemList) -> Self {
        Self {
            name: list.name.clone(),
            icon: list.icon_name.as_deref().and_then(get_icon_data),
            item_ids: Vec::new(),
            list_to_update: Some(list),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Icon chosen in the picker, if any
    pub fn set_icon(&mut self, icon: Option<&'static IconDef>) {
        self.icon = icon;
    }

    /// Replace the complete set of member items
    pub fn select_items(&mut self, item_ids: Vec<u32>) {
        self.item_ids = item_ids;
    }

    /// Validate the current input into persistable fields
    pub fn validate(&self) -> DbResult<ListFields> {
        Ok(ListFields {
            name: validated_name(&self.name)?,
            icon_name: self.icon.map(|icon| icon.name.to_string()),
        })
    }

    /// Validate and persist; returns the stored list for optimistic
    /// view updates.
    pub async fn submit(&self, client: &DbClient) -> DbResult<ItemList> {
        let fields = self.validate()?;
        match &self.list_to_update {
            None => client.create_list(fields, &self.item_ids).await,
            Some(previous) => client.update_list(previous.id, fields, &self.item_ids).await,
        }
    }
}
