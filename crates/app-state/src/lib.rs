//! Application state management for the shopping list app
//!
//! This crate owns the authoritative shopping list and publishes immutable
//! snapshots of it whenever it changes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod shopping_list;

pub use config::{ConfigError, IdStrategy, StoreConfig};
pub use shopping_list::{
    ShoppingListError, ShoppingListEvent, ShoppingListSnapshot, ShoppingListStore,
};
