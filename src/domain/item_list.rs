//! ItemList Entity
//!
//! A named collection of items, optionally carrying an icon from the
//! static catalog.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A named list of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    /// Unique identifier
    pub id: u32,
    /// List name
    pub name: String,
    /// Name of an icon from the static catalog
    pub icon_name: Option<String>,
}

/// Mutable list fields, as collected by the forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFields {
    pub name: String,
    pub icon_name: Option<String>,
}

impl ItemList {
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            icon_name: None,
        }
    }

    pub fn with_icon(id: u32, name: String, icon_name: String) -> Self {
        Self {
            id,
            name,
            icon_name: Some(icon_name),
        }
    }

    /// Build a list from an assigned id and its mutable fields
    pub fn from_fields(id: u32, fields: ListFields) -> Self {
        Self {
            id,
            name: fields.name,
            icon_name: fields.icon_name,
        }
    }

    /// The mutable fields of this list
    pub fn fields(&self) -> ListFields {
        ListFields {
            name: self.name.clone(),
            icon_name: self.icon_name.clone(),
        }
    }
}

impl Entity for ItemList {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
