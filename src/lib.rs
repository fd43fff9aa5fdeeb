//! Simple-List Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access over the local SQLite store
//! - events: Change notification channel
//! - view: Reconciliation reducers and materialized views
//! - forms: Input validation and submission
//! - icons: Static icon catalog

pub mod client;
pub mod config;
pub mod domain;
pub mod events;
pub mod forms;
pub mod icons;
pub mod repository;
pub mod view;

pub use client::DbClient;
pub use config::DbConfig;
pub use domain::{DbError, DbResult, Item, ItemFields, ItemList, ListFields};
pub use events::{ChangeEvent, ChangeNotifier};
