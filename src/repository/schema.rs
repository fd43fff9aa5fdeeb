//! Table Definitions
//!
//! The three tables of the store. All statements are idempotent so the
//! schema can be re-applied against an existing database file.

/// Checklist items
pub const ITEMS: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT
)";

/// Named lists
pub const LISTS: &str = "CREATE TABLE IF NOT EXISTS lists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    icon_name TEXT
)";

/// Many-to-many join between items and lists. Deleting either side
/// cascades the pair away.
pub const ITEMS_LISTS: &str = "CREATE TABLE IF NOT EXISTS items_lists (
    item_id INTEGER NOT NULL,
    list_id INTEGER NOT NULL,
    PRIMARY KEY (list_id, item_id),
    FOREIGN KEY (item_id) REFERENCES items(id) ON DELETE CASCADE,
    FOREIGN KEY (list_id) REFERENCES lists(id) ON DELETE CASCADE
)";

/// Index for item-side lookups (the primary key already covers the
/// list-side join).
pub const IDX_ITEMS_LISTS_ITEM: &str =
    "CREATE INDEX IF NOT EXISTS idx_items_lists_item ON items_lists(item_id)";

/// All schema statements, in application order
pub const ALL: &[&str] = &[ITEMS, LISTS, ITEMS_LISTS, IDX_ITEMS_LISTS_ITEM];
