//! HTTP handlers

pub mod contacts;
pub mod message;

pub use message::message;
