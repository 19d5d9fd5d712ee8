//! Common utilities for the xmljson converter.
//!
//! This crate provides the pieces the XML parser leans on but which carry no
//! markup knowledge of their own:
//! - **Container** - a `serde_json` map builder that coalesces repeated keys
//!   into arrays
//! - **Value helpers** - scalar coercion of raw text
//! - **Warning System** - colored terminal output for markup that is dropped
//!   during conversion

pub mod container;
pub mod value;
pub mod warning;

pub use container::Container;
pub use value::{CONTENT_KEY, string_to_value};
