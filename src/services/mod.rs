pub mod markup_service;
pub mod page_format;
pub mod page_store;

pub use markup_service::{LinkResolver, MarkupRenderer, PrefixLinkResolver, render};
pub use page_format::{parse_page, serialize_page};
pub use page_store::PageStore;
