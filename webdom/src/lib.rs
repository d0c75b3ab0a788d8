//! Retained markup tree for grid rendering.
//!
//! Elements are built with chained builder calls, looked up by id, key or
//! class, and serialized to HTML with [`render::to_html`].

pub mod element;
pub mod render;
pub mod types;

pub use element::{Content, Element, find_all, find_by_class, find_by_key, find_element};
pub use render::{to_html, write_html};
pub use types::*;
