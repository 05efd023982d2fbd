//! Foodgram Core - Shared types and the shopping-list engine.
//!
//! This crate provides the domain types used across all Foodgram components:
//! - `api` - HTTP backend for recipes and shopping carts
//! - `cli` - Command-line tools for migrations and fixture loading
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure computation - no
//! database access, no HTTP. Storage is reached through the
//! [`ShoppingCartReader`] port, which the `api` crate implements on top of
//! `PostgreSQL`.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, ingredient identity, recipe summaries
//! - [`shopping_list`] - Grouping, summing and rendering of ingredient lines
//! - [`cart`] - The cart reader port and the [`ShoppingListAggregator`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod shopping_list;
pub mod types;

pub use cart::{CartSnapshot, ShoppingCartReader, ShoppingListAggregator};
pub use shopping_list::{
    SHOPPING_LIST_CONTENT_TYPE, SHOPPING_LIST_FILENAME, SHOPPING_LIST_HEADER, ShoppingList,
    aggregate,
};
pub use types::*;
