//! Item Entity
//!
//! A single checklist entry. Items may belong to any number of lists
//! through the items_lists relationship table.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A checklist item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: u32,
    /// Item name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Mutable item fields, as collected by the forms.
///
/// Updates are a full replace of these fields, not a partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            description: None,
        }
    }

    /// Build an item from an assigned id and its mutable fields
    pub fn from_fields(id: u32, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }

    /// The mutable fields of this item
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
