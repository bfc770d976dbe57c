//! Dashboard UI components

pub mod footer;
pub mod header;
pub mod logs;
pub mod shorten_panel;
pub mod top_urls_table;
