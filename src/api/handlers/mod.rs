//! HTTP request handlers organized by resource type.

pub mod categories;
pub mod health;
pub mod products;
