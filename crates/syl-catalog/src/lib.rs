//! # syl-catalog
//!
//! The lesson script catalog: a JSONL-backed record store, derived lookup
//! indices, and a Markdown renderer for browsing.
//!
//! - [`CatalogStore`] owns the records and rewrites the catalog file on every
//!   mutation (write-to-temp then rename).
//! - [`CatalogIndex`] is rebuilt from scratch whenever the store changes.
//! - [`render_markdown`] groups query results by topic.

pub mod error;
pub mod index;
pub mod persist;
pub mod render;
pub mod store;
pub mod update;

pub use error::CatalogError;
pub use index::CatalogIndex;
pub use persist::{CatalogFile, write_atomic};
pub use render::{RenderOptions, render_markdown};
pub use store::{CatalogStore, Lessons};
pub use update::{LessonUpdate, LessonUpdateBuilder};
