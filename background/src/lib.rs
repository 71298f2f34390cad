//! Background coordinator for jobclip.
//!
//! A long-lived local service: the browser shim reports navigations and
//! forwards runtime messages to it over HTTP, and it talks to Notion.

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod notion;
pub mod tabs;

pub use config::Config;
pub use coordinator::Coordinator;
pub use error::CoordinatorError;
