//! Icon Picker
//!
//! Selection state for the icon chooser: a current selection (possibly
//! carried over from the list being edited), a search query filtering
//! the catalog, and confirm/cancel outcomes.

use crate::icons::{search, IconDef};
use super::FormResponse;

#[derive(Default)]
pub struct IconPicker {
    selected: Option<&'static IconDef>,
    query: String,
}

impl IconPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picker opened from an edit form, starting at the list's current
    /// icon.
    pub fn with_previous(previous: Option<&'static IconDef>) -> Self {
        Self {
            selected: previous,
            query: String::new(),
        }
    }

    /// Raw search bar input; stored trimmed and lowercased
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
    }

    /// Catalog entries matching the current query
    pub fn filtered(&self) -> Vec<&'static IconDef> {
        search(&self.query)
    }

    /// Select an icon, or `None` to clear the selection
    pub fn select(&mut self, icon: Option<&'static IconDef>) {
        self.selected = icon;
    }

    pub fn selected(&self) -> Option<&'static IconDef> {
        self.selected
    }

    /// Close keeping the selection
    pub fn confirm(self) -> FormResponse<&'static IconDef> {
        FormResponse::confirmed(self.selected)
    }

    /// Close discarding the selection
    pub fn cancel(self) -> FormResponse<&'static IconDef> {
        FormResponse::cancelled()
    }
}
