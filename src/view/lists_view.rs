//! List Overview
//!
//! Materialized copy of all lists, with each list's icon name resolved
//! against the static catalog for rendering.

use crate::client::DbClient;
use crate::domain::{DbResult, ItemList};
use crate::events::ChangeEvent;
use crate::icons::{get_icon_data, IconDef};
use super::reducer::reduce_lists;

/// One row of the overview: the list plus its resolved glyph
pub struct ListEntry<'a> {
    pub list: &'a ItemList,
    pub icon: Option<&'static IconDef>,
}

#[derive(Default)]
pub struct ListsView {
    lists: Vec<ItemList>,
}

impl ListsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch all lists once, through the client
    pub async fn load(client: &DbClient) -> DbResult<Self> {
        let lists = client.list_lists().await?;
        Ok(Self { lists })
    }

    /// Patch the local sequence from a change event
    pub fn apply(&mut self, event: &ChangeEvent) {
        self.lists = reduce_lists(std::mem::take(&mut self.lists), event);
    }

    pub fn lists(&self) -> &[ItemList] {
        &self.lists
    }

    /// Rows with icons resolved; unknown or absent icon names resolve to
    /// `None` and render without a glyph.
    pub fn entries(&self) -> Vec<ListEntry<'_>> {
        self.lists
            .iter()
            .map(|list| ListEntry {
                list,
                icon: list.icon_name.as_deref().and_then(get_icon_data),
            })
            .collect()
    }
}
