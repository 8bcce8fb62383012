//! Behavior core for the Laurel Cottage site enhancements.
//!
//! Everything the page handlers decide lives here, free of any DOM types, so
//! the browser crate only has to translate these decisions into class, style
//! and node mutations.

pub mod anchor;
pub mod config;
pub mod contact;
pub mod header;
pub mod menu;
pub mod reveal;
pub mod status;
pub mod tracking;

pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactEnquiry, FormSnapshot, ValidationError};
pub use menu::MenuState;
pub use status::{StatusKind, StatusSlot};
