//! Core domain types for the shopping list app
//!
//! This crate holds the shopping item model and the quantity parsing rules
//! shared by the state store and the presentation layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod items;
pub mod quantity;

pub use items::{ItemId, ShoppingItem};
pub use quantity::{parse_quantity, parse_quantity_or_default, QuantityError, DEFAULT_QUANTITY};
