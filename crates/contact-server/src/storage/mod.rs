//! Storage layer
//!
//! Uses SQLite (embedded) - no external database server required.

pub mod db;

pub use db::Database;
