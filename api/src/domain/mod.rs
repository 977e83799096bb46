//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Articles and raw feed items
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
