//! Terminal user interface

pub mod app;
pub mod dashboard;
pub mod messages;

pub use app::{App, run};
