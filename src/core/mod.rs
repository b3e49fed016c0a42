//! Core domain types
//!
//! Fundamental types for the puzzle: canonical link keys and the free-text
//! answer matcher. Everything here is pure, deterministic, and free of I/O.

mod link;
pub mod matcher;

pub use link::{ENTITY_COUNT, LINK_COUNT, LinkKey, LinkKeyError};
