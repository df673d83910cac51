//! Platform and process utilities

#[cfg(feature = "clipboard")]
pub mod clipboard;
pub mod logging;
