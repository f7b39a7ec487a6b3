//! dftr - the storage and markup core of a personal file-backed wiki
//!
//! Pages live as plain text files under a data root, addressed by
//! colon-delimited names (`projects:rust:notes` is
//! `<root>/projects/rust/notes.txt`). Each file carries the page's markup
//! followed by a separator line and a JSON metadata object. Markup is turned
//! into HTML by [`MarkupRenderer`].
//!
//! The HTTP layer that serves pages is not part of this crate; it calls
//! [`PageStore`] and [`render`] per request.

pub mod config;
pub mod errors;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::{Result, WikiError};
pub use logger::Logger;
pub use services::{LinkResolver, MarkupRenderer, PageStore, PrefixLinkResolver, render};
pub use types::{Metadata, Page};

pub use utils::sanitize_page_name as sanitize;
